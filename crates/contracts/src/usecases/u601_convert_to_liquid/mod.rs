pub mod request;
pub mod response;
pub mod source;

pub use request::{ConvertRequest, DetailRequest};
pub use response::{ConversionResult, GenerationErrorBody, GenerationResponse, GenerationStage};
pub use source::SourceDocument;
