mod model_handle_test;
