mod passthrough_enhancer;

pub use passthrough_enhancer::PassthroughEnhancer;
