use std::sync::Arc;
use std::time::Duration;

use murmur::application::ports::TranscriptionError;
use murmur::application::services::ModelHandle;
use tokio::task::JoinSet;

use crate::support::{CountingLoader, FlakyLoader, TEST_TRANSCRIPT};

#[tokio::test]
async fn given_new_handle_when_not_used_then_model_is_not_loaded() {
    let loader = Arc::new(CountingLoader::transcribing(TEST_TRANSCRIPT));
    let handle = ModelHandle::new(loader.clone());

    assert!(!handle.is_loaded());
    assert_eq!(loader.loads(), 0);
}

#[tokio::test]
async fn given_sequential_calls_when_getting_model_then_loads_once() {
    let loader = Arc::new(CountingLoader::transcribing(TEST_TRANSCRIPT));
    let handle = ModelHandle::new(loader.clone());

    for _ in 0..5 {
        handle.get().await.unwrap();
    }

    assert!(handle.is_loaded());
    assert_eq!(loader.loads(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn given_concurrent_calls_when_getting_model_then_loads_once() {
    let loader =
        Arc::new(CountingLoader::transcribing(TEST_TRANSCRIPT).with_delay(Duration::from_millis(50)));
    let handle = Arc::new(ModelHandle::new(loader.clone()));

    let mut tasks = JoinSet::new();
    for _ in 0..16 {
        let handle = Arc::clone(&handle);
        tasks.spawn(async move { handle.get().await.map(|_| ()) });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap().unwrap();
    }

    assert_eq!(loader.loads(), 1);
}

#[tokio::test]
async fn given_failed_load_when_getting_again_then_retries_and_succeeds() {
    let loader = Arc::new(FlakyLoader::new(1));
    let handle = ModelHandle::new(loader.clone());

    let first = handle.get().await;
    assert!(matches!(first, Err(TranscriptionError::ModelUnavailable(_))));
    assert!(!handle.is_loaded());

    handle.get().await.unwrap();
    handle.get().await.unwrap();

    assert!(handle.is_loaded());
    assert_eq!(loader.attempts(), 2);
}
