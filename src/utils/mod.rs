pub mod text;

pub use text::sanitize_transcript;
