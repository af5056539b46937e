mod passthrough_enhancer_test;
mod speech_model_factory_test;
