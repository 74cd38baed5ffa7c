mod pipeline_service;

pub use pipeline_service::PipelineService;
