mod audio_format_test;
mod storage_path_test;
