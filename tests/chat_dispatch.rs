// tests/chat_dispatch.rs
// Dispatcher contract: preconditions, single-flight, failure handling

mod common;

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

use common::{dispatcher_with, MockProvider};
use cropguard::chat::provider::ProviderId;
use cropguard::chat::{Role, GREETING, SYSTEM_PROMPT};
use cropguard::error::ChatError;

#[tokio::test]
async fn empty_message_is_a_noop() {
    let provider = MockProvider::replying(ProviderId::Chatgpt, "unused");
    let dispatcher = dispatcher_with(provider.clone(), &[(ProviderId::Chatgpt, "sk-test")]);

    assert!(dispatcher.send("").await.unwrap().is_none());
    assert!(dispatcher.send("   \n\t ").await.unwrap().is_none());

    assert_eq!(provider.call_count(), 0, "no HTTP call for empty input");
    let history = dispatcher.history().await;
    assert_eq!(history.len(), 1, "nothing appended beyond the greeting");
}

#[tokio::test]
async fn missing_credential_blocks_the_call() {
    let provider = MockProvider::replying(ProviderId::Chatgpt, "unused");
    let dispatcher = dispatcher_with(provider.clone(), &[]);

    let err = dispatcher.send("How do I treat blight?").await.unwrap_err();
    assert!(matches!(err, ChatError::MissingCredential(ProviderId::Chatgpt)));

    assert_eq!(provider.call_count(), 0);
    assert_eq!(
        dispatcher.history().await.len(),
        1,
        "user turn must not be appended when the precondition fails"
    );
}

#[tokio::test]
async fn successful_send_appends_user_and_assistant() {
    let provider = MockProvider::replying(ProviderId::Chatgpt, "Remove affected leaves.");
    let dispatcher = dispatcher_with(provider.clone(), &[(ProviderId::Chatgpt, "sk-test")]);

    let reply = dispatcher
        .send("How do I treat blight?")
        .await
        .unwrap()
        .expect("non-empty input yields a reply");
    assert_eq!(reply.content, "Remove affected leaves.");

    let history = dispatcher.history().await;
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].role, Role::Assistant);
    assert_eq!(history[0].content, GREETING);
    assert_eq!(history[1].role, Role::User);
    assert_eq!(history[1].content, "How do I treat blight?");
    assert_eq!(history[2].role, Role::Assistant);
    assert_eq!(history[2].content, "Remove affected leaves.");

    assert_eq!(provider.call_count(), 1, "exactly one HTTP call per send");
    let outbound = provider.last_messages();
    assert_eq!(outbound.len(), 2);
    assert_eq!(outbound[0].role, "system");
    assert_eq!(outbound[0].content, SYSTEM_PROMPT);
    assert_eq!(outbound[1].role, "user");
    assert_eq!(outbound[1].content, "How do I treat blight?");
}

#[tokio::test]
async fn transport_failure_keeps_the_user_turn() {
    let provider = MockProvider::failing(ProviderId::Chatgpt, 401);
    let dispatcher = dispatcher_with(provider.clone(), &[(ProviderId::Chatgpt, "sk-bad")]);

    let err = dispatcher.send("How do I treat blight?").await.unwrap_err();
    assert!(matches!(err, ChatError::Transport { .. }));

    let history = dispatcher.history().await;
    assert_eq!(history.len(), 2, "no assistant message on failure");
    assert_eq!(history[1].role, Role::User);
    assert_eq!(history[1].content, "How do I treat blight?");

    assert!(
        !dispatcher.ui_state().await.pending_request,
        "failure must return the dispatcher to idle"
    );

    // The user can resend manually; a fresh call goes out
    let _ = dispatcher.send("trying again").await;
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn second_send_while_pending_is_rejected() {
    let gate = Arc::new(Notify::new());
    let provider = MockProvider::gated(ProviderId::Chatgpt, "done", gate.clone());
    let dispatcher = dispatcher_with(provider.clone(), &[(ProviderId::Chatgpt, "sk-test")]);

    let background = {
        let dispatcher = dispatcher.clone();
        tokio::spawn(async move { dispatcher.send("first question").await })
    };

    // Wait until the first request is actually in flight
    while provider.call_count() == 0 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let err = dispatcher.send("second question").await.unwrap_err();
    assert!(matches!(err, ChatError::Busy));

    gate.notify_one();
    let first = background.await.unwrap().unwrap();
    assert_eq!(first.unwrap().content, "done");

    assert_eq!(provider.call_count(), 1, "never two concurrent calls");
    let history = dispatcher.history().await;
    assert_eq!(history.len(), 3, "rejected send appended nothing");
}

#[tokio::test]
async fn provider_switch_preserves_each_credential() {
    let provider = MockProvider::replying(ProviderId::Chatgpt, "unused");
    let dispatcher = dispatcher_with(
        provider,
        &[
            (ProviderId::Chatgpt, "sk-openai"),
            (ProviderId::Deepseek, "sk-deepseek"),
        ],
    );

    assert_eq!(
        dispatcher.select_provider(ProviderId::Deepseek).await.as_deref(),
        Some("sk-deepseek")
    );
    assert_eq!(
        dispatcher.select_provider(ProviderId::Chatgpt).await.as_deref(),
        Some("sk-openai")
    );
    assert_eq!(
        dispatcher.select_provider(ProviderId::Deepseek).await.as_deref(),
        Some("sk-deepseek"),
        "switching back and forth must not leak keys across providers"
    );
}

#[tokio::test]
async fn prior_turns_are_not_resent() {
    let provider = MockProvider::replying(ProviderId::Chatgpt, "answer");
    let dispatcher = dispatcher_with(provider.clone(), &[(ProviderId::Chatgpt, "sk-test")]);

    dispatcher.send("first question").await.unwrap();
    dispatcher.send("second question").await.unwrap();

    let outbound = provider.last_messages();
    assert_eq!(
        outbound.len(),
        2,
        "only the system prompt and the latest user turn go out"
    );
    assert_eq!(outbound[1].content, "second question");
}

#[tokio::test]
async fn empty_credential_is_rejected_without_saving() {
    let provider = MockProvider::replying(ProviderId::Chatgpt, "unused");
    let dispatcher = dispatcher_with(provider, &[]);

    let err = dispatcher
        .save_credential(ProviderId::Chatgpt, "   ")
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::EmptyCredential));

    assert_eq!(
        dispatcher.select_provider(ProviderId::Chatgpt).await,
        None,
        "nothing must be persisted for a blank key"
    );
}
