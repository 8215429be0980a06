pub mod outcome;
pub mod source;
pub mod transcript;
pub mod video_id;

pub use outcome::*;
pub use source::*;
pub use transcript::*;
pub use video_id::*;
