// UseCase handlers
pub mod u601_convert_to_liquid;
