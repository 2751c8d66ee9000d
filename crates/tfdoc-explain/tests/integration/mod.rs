mod explain_pipeline;
mod failures;
