//! Drives the submission controller against the real router over TCP.

use std::net::SocketAddr;
use std::sync::Arc;

use portfolio::config::Config;
use portfolio::contact::{
    ContactForm, ContactInbox, FormField, HttpContactTransport, SubmissionController,
    SubmissionStatus, SubmitError,
};
use portfolio::routes::build_router;
use portfolio::state::AppState;

async fn spawn_server() -> (SocketAddr, ContactInbox) {
    let state = AppState::new(Config {
        port: 0,
        rust_log: "debug".to_string(),
        assets_dir: "public".to_string(),
        contact_endpoint: String::new(),
    });
    let inbox = state.inbox.clone();
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, inbox)
}

fn controller_for(addr: SocketAddr) -> SubmissionController {
    let transport = HttpContactTransport::new(format!("http://{addr}/api/contact")).unwrap();
    SubmissionController::new(Arc::new(transport))
}

#[tokio::test]
async fn test_submit_delivers_to_receiver_and_clears_form() {
    let (addr, inbox) = spawn_server().await;
    let controller = controller_for(addr);

    controller.update_field(FormField::Name, "Grace Hopper").await;
    controller.update_field(FormField::Email, "grace@example.com").await;
    controller.update_field(FormField::Subject, "Compilers").await;
    controller.update_field(FormField::Message, "Got a minute?").await;

    controller.submit().await.unwrap();

    assert_eq!(controller.status().await, SubmissionStatus::Success);
    assert_eq!(controller.form().await, ContactForm::default());

    let received = inbox.recent().await;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].form.email, "grace@example.com");
    assert_eq!(received[0].form.message, "Got a minute?");
}

#[tokio::test]
async fn test_rejected_submit_keeps_fields_for_retry() {
    let (addr, inbox) = spawn_server().await;
    let controller = controller_for(addr);

    controller.update_field(FormField::Name, "Grace Hopper").await;
    controller.update_field(FormField::Email, "grace@example.com").await;

    let err = controller.submit().await.unwrap_err();
    assert!(matches!(err, SubmitError::Rejected { status: 400 }));
    assert_eq!(controller.status().await, SubmissionStatus::Error);
    assert_eq!(controller.form().await.name, "Grace Hopper");
    assert!(inbox.is_empty().await);

    controller.update_field(FormField::Subject, "Compilers").await;
    controller.update_field(FormField::Message, "Second try").await;
    controller.submit().await.unwrap();

    assert_eq!(controller.status().await, SubmissionStatus::Success);
    assert_eq!(inbox.len().await, 1);
}
