//! Server actions and component creation over the promise bridge.

mod common;

use common::Harness;
use lumen_action::{ActionError, ActionHandle, ComponentBatch, ComponentSpec, ServerAction, classify};
use lumen_core::{ActionResult, SdkConfig, Status};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn error_rejection_classifies_to_first_message() {
    let h = Harness::new();
    h.host
        .respond("c.saveRecord", ActionResult::error_message("field required"));
    let promise = ServerAction::plain(h.boundary.clone(), "saveRecord", None).execute_promise();

    h.host.complete_all();
    let err = promise.await.unwrap_err();
    assert_eq!(classify(&err), "field required");
    assert_eq!(err.status(), Some(Status::Error));
    assert!(h.surface.shown().is_empty());
}

#[tokio::test]
async fn host_is_called_before_the_promise_is_awaited() {
    let h = Harness::new();
    h.host
        .respond("c.getRecord", ActionResult::success(json!({"Name": "Acme"})));
    let promise = ServerAction::plain(h.boundary.clone(), "getRecord", None).execute_promise();
    assert_eq!(h.host.enqueued(), 1);

    h.host.complete_all();
    let name = promise
        .then(|record| Ok(record["Name"].as_str().unwrap_or_default().to_owned()))
        .await;
    assert_eq!(name, Ok("Acme".to_owned()));
    assert_eq!(h.host.enqueued(), 1);
}

#[tokio::test]
async fn handled_promise_toasts_then_rejects() {
    let h = Harness::new();
    h.host
        .respond("c.saveRecord", ActionResult::error_message("duplicate value"));
    let promise = ServerAction::handled(h.boundary.clone(), "saveRecord", None)
        .execute_promise()
        .catch({
            let log = h.log.clone();
            move |err| {
                log.push(format!("rejected:{}", classify(&err)));
                Err(err)
            }
        });

    h.host.complete_all();
    assert!(promise.await.is_err());
    assert_eq!(
        h.log.entries(),
        vec![
            "enqueue:c.saveRecord",
            "toast:duplicate value",
            "rejected:duplicate value",
        ]
    );
}

#[tokio::test]
async fn handled_promise_rejects_when_surface_fails() {
    let h = Harness::with_failing_surface();
    h.host
        .respond("c.saveRecord", ActionResult::error_message("locked"));
    let promise = ServerAction::handled(h.boundary.clone(), "saveRecord", None).execute_promise();

    h.host.complete_all();
    let err = promise.await.unwrap_err();
    assert_eq!(err, ActionError::Failed(ActionResult::error_message("locked")));
    assert_eq!(h.log.entries(), vec!["enqueue:c.saveRecord", "toast-failed"]);
}

#[tokio::test]
async fn late_observers_see_the_settled_outcome() {
    let h = Harness::new();
    h.host.respond("c.getRecord", ActionResult::success(7));
    let promise = ServerAction::plain(h.boundary.clone(), "getRecord", None).execute_promise();
    h.host.complete_all();

    assert_eq!(promise.clone().await, Ok(json!(7)));
    let doubled = promise.then(|v| Ok(v.as_i64().unwrap_or_default() * 2));
    assert_eq!(doubled.await, Ok(14));
}

#[tokio::test]
async fn dropped_callback_rejects_incomplete() {
    let h = Harness::new();
    let promise = ServerAction::plain(h.boundary.clone(), "getRecord", None).execute_promise();
    h.host.drop_pending();

    let err = promise.await.unwrap_err();
    assert_eq!(err.status(), Some(Status::Incomplete));
    assert_eq!(classify(&err), "No response from server or client is offline");
}

#[tokio::test]
async fn unresolved_promise_rejects_immediately() {
    let h = Harness::new();
    let promise = ServerAction::plain(h.boundary.clone(), "nope", None).execute_promise();
    assert_eq!(
        promise.await,
        Err(ActionError::Unresolved {
            action: "c.nope".into()
        })
    );
    assert_eq!(h.host.enqueued(), 0);
}

#[tokio::test]
async fn invoke_returns_the_raw_result() {
    let h = Harness::new();
    h.host.respond("c.getRecord", ActionResult::incomplete());
    let handle = ActionHandle::new(h.boundary.clone(), "getRecord", None);
    let pending = handle.invoke().unwrap();
    h.host.complete_all();
    assert_eq!(pending.await, ActionResult::incomplete());
    assert_eq!(h.guard.wrapped(), 1);
}

#[tokio::test]
async fn custom_config_drives_prefix_and_toast() {
    let config = SdkConfig::from_json_str(
        r#"{
            "controller_prefix": "c.",
            "toast": { "long_duration_ms": 12000, "error_title": "Oops" },
            "messages": { "incomplete_action": "Offline" }
        }"#,
    )
    .unwrap();
    let h = Harness::with_config(config);
    h.host.respond("c.saveRecord", ActionResult::incomplete());
    let promise = ServerAction::handled(h.boundary.clone(), "saveRecord", None).execute_promise();
    h.host.complete_all();

    assert!(promise.await.is_err());
    let shown = h.surface.shown();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].title.as_deref(), Some("Oops"));
    assert_eq!(shown[0].message.as_deref(), Some("Offline"));
    assert_eq!(shown[0].duration_ms, Some(12000));
}

#[tokio::test]
async fn component_creation_resolves_with_handle() {
    let h = Harness::new();
    let created = ComponentSpec::new("ui:button")
        .param("label", "Save")
        .create(&h.boundary)
        .await
        .unwrap();
    assert_eq!(created["component"], json!("ui:button"));
    assert_eq!(created["attributes"]["label"], json!("Save"));
}

#[tokio::test]
async fn component_batch_creates_in_one_call() {
    let h = Harness::new();
    let batch = ComponentBatch::new()
        .add(ComponentSpec::new("ui:button"))
        .add(ComponentSpec::new("ui:badge"));
    let created = batch.create(&h.boundary).unwrap().await.unwrap();

    assert_eq!(created.len(), 2);
    assert_eq!(created[1]["component"], json!("ui:badge"));
    assert_eq!(h.components.requests().len(), 1);
    assert!(ComponentBatch::new().create(&h.boundary).is_none());
}

#[tokio::test]
async fn component_failure_rejects_with_host_message() {
    let h = Harness::new();
    let err = ComponentSpec::new("bad:widget")
        .create(&h.boundary)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ActionError::Component {
            status: Status::Error,
            message: "unknown component bad:widget".into(),
        }
    );
    assert_eq!(classify(&err), "unknown component bad:widget");
}
