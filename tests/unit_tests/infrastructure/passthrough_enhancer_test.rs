use murmur::application::ports::{EnhancementError, TextEnhancer};
use murmur::infrastructure::enhancement::PassthroughEnhancer;

#[tokio::test]
async fn given_text_when_enhancing_then_returns_it_unchanged() {
    let enhancer = PassthroughEnhancer;

    for text in ["hello world", " padded ", "multi\nline", "ünïcödé ✓"] {
        assert_eq!(enhancer.enhance(text).await.unwrap(), text);
    }
}

#[tokio::test]
async fn given_enhanced_text_when_enhancing_again_then_result_is_stable() {
    let enhancer = PassthroughEnhancer;

    let once = enhancer.enhance("hello world").await.unwrap();
    let twice = enhancer.enhance(&once).await.unwrap();

    assert_eq!(once, twice);
}

#[tokio::test]
async fn given_empty_text_when_enhancing_then_returns_empty_input_error() {
    let result = PassthroughEnhancer.enhance("").await;

    assert!(matches!(result, Err(EnhancementError::EmptyInput)));
}
