mod common;

use common::{coordinator, pdf_of_size, FakeTransport, UiCall};
use resume_evaluate_submit::models::{QuestionDefault, SelectedFile, PDF_MIME_TYPE};
use resume_evaluate_submit::services::consent_gate::ConsentState;
use resume_evaluate_submit::{EvaluationResult, FileRejection, FlowOutcome, UiEvent};
use std::sync::Arc;
use tokio::sync::Notify;
use tokio_test::{assert_err, assert_ok};

const REPORT_BODY: &str = r##"{"markdown_content":"# Report"}"##;

/// 选择文件 → 提交 → 勾选 → 同意
async fn submit_with_consent(c: &common::TestCoordinator) -> FlowOutcome {
    assert_eq!(c.handle(UiEvent::SubmitRequested).await, FlowOutcome::AwaitingConsent);
    c.handle(UiEvent::ConsentCheckboxToggled(true)).await;
    c.handle(UiEvent::ConsentAccepted).await
}

#[tokio::test]
async fn test_end_to_end_valid_submission() {
    let c = coordinator(FakeTransport::responding(200, REPORT_BODY));

    c.initialize_questions(&[
        QuestionDefault::new("Background in Computer Science?", "10"),
        QuestionDefault::new("Experience with Python?", "20"),
        QuestionDefault::new("Experience with Machine Learning?", "30"),
    ]);
    c.handle(UiEvent::GenderWeightsChanged {
        male: "50".into(),
        female: "50".into(),
    })
    .await;

    let file = pdf_of_size(2 * 1024 * 1024);
    assert_eq!(
        c.handle(UiEvent::FileSelected(Some(file.clone()))).await,
        FlowOutcome::FileAccepted
    );

    let outcome = submit_with_consent(&c).await;
    assert_eq!(
        outcome,
        FlowOutcome::Completed(EvaluationResult::Report {
            markdown_content: "# Report".into()
        })
    );

    let requests = c.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].file, file);
    assert_eq!(
        requests[0].questions_data,
        r#"[{"question":"Background in Computer Science?","weightage":10},{"question":"Experience with Python?","weightage":20},{"question":"Experience with Machine Learning?","weightage":30}]"#
    );
    assert_eq!(requests[0].gender_weights, r#"{"male":50,"female":50}"#);

    let view = c.ui().last_result().unwrap();
    assert_eq!(view.body.as_deref(), Some("# Report"));
    assert!(view.scroll_into_view);
    assert_eq!(c.ui().submit_toggles(), vec![false, true]);
    assert_eq!(c.consent_state(), ConsentState::Granted);
}

#[tokio::test]
async fn test_oversized_file_is_rejected_without_request() {
    let c = coordinator(FakeTransport::responding(200, REPORT_BODY));

    let outcome = c
        .handle(UiEvent::FileSelected(Some(pdf_of_size(12 * 1024 * 1024))))
        .await;
    assert_eq!(
        outcome,
        FlowOutcome::FileRejected(FileRejection::TooLarge {
            size_bytes: 12 * 1024 * 1024
        })
    );
    assert_eq!(c.selected_file(), None);
    assert!(c.ui().calls().contains(&UiCall::ResetFileInput));
    assert!(c
        .ui()
        .notifications()
        .iter()
        .any(|n| n.title == "File Size Exceeded"));

    // 被拒绝的文件无法直接提交
    assert_eq!(
        c.handle(UiEvent::SubmitRequested).await,
        FlowOutcome::FileRejected(FileRejection::NotSelected)
    );
    assert_eq!(c.transport().calls(), 0);
}

#[tokio::test]
async fn test_rejected_selection_replaces_previous_file() {
    let c = coordinator(FakeTransport::responding(200, REPORT_BODY));
    c.select_file(Some(pdf_of_size(1024)));
    assert!(c.selected_file().is_some());

    let txt = SelectedFile::in_memory("resume.txt", "text/plain", b"hello".to_vec());
    assert!(matches!(
        c.select_file(Some(txt)),
        FlowOutcome::FileRejected(FileRejection::WrongType { .. })
    ));
    assert_eq!(c.selected_file(), None);
}

#[tokio::test]
async fn test_empty_selection_is_ignored() {
    let c = coordinator(FakeTransport::responding(200, REPORT_BODY));
    c.select_file(Some(pdf_of_size(1024)));
    assert_eq!(c.handle(UiEvent::FileSelected(None)).await, FlowOutcome::Updated);
    assert!(c.selected_file().is_some());
}

#[tokio::test]
async fn test_submit_without_file_notifies() {
    let c = coordinator(FakeTransport::responding(200, REPORT_BODY));
    assert_eq!(
        c.handle(UiEvent::SubmitRequested).await,
        FlowOutcome::FileRejected(FileRejection::NotSelected)
    );
    let notifications = c.ui().notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "No File Selected");
    assert_eq!(c.transport().calls(), 0);
}

#[tokio::test]
async fn test_cleared_file_cannot_be_submitted() {
    let c = coordinator(FakeTransport::responding(200, REPORT_BODY));
    c.select_file(Some(pdf_of_size(1024)));
    c.handle(UiEvent::FileCleared).await;
    assert_eq!(c.selected_file(), None);
    assert!(c.ui().calls().contains(&UiCall::HideFileInfo));
    assert_eq!(
        c.handle(UiEvent::SubmitRequested).await,
        FlowOutcome::FileRejected(FileRejection::NotSelected)
    );
}

#[tokio::test]
async fn test_accept_without_checkbox_keeps_gate_closed() {
    let c = coordinator(FakeTransport::responding(200, REPORT_BODY));
    c.select_file(Some(pdf_of_size(1024)));

    assert_eq!(c.handle(UiEvent::SubmitRequested).await, FlowOutcome::AwaitingConsent);
    assert_eq!(c.handle(UiEvent::ConsentAccepted).await, FlowOutcome::ConsentRequired);

    let view = c.ui().last_consent().unwrap();
    assert!(view.open);
    assert!(view.error_visible);
    assert_eq!(c.consent_state(), ConsentState::NotGranted);
    assert_eq!(c.transport().calls(), 0);

    // 勾选后错误提示消失，再同意即发出请求
    c.handle(UiEvent::ConsentCheckboxToggled(true)).await;
    assert!(!c.ui().last_consent().unwrap().error_visible);
    assert!(matches!(
        c.handle(UiEvent::ConsentAccepted).await,
        FlowOutcome::Completed(_)
    ));
    assert_eq!(c.transport().calls(), 1);
}

#[tokio::test]
async fn test_closing_gate_abandons_silently() {
    let c = coordinator(FakeTransport::responding(200, REPORT_BODY));
    c.select_file(Some(pdf_of_size(1024)));
    let notifications_before = c.ui().notifications().len();

    assert_eq!(c.handle(UiEvent::SubmitRequested).await, FlowOutcome::AwaitingConsent);
    c.handle(UiEvent::ConsentCheckboxToggled(true)).await;
    assert_eq!(c.handle(UiEvent::ConsentClosed).await, FlowOutcome::Abandoned);

    assert_eq!(c.transport().calls(), 0);
    assert_eq!(c.ui().notifications().len(), notifications_before);
    assert_eq!(c.consent_state(), ConsentState::NotGranted);
    assert_eq!(c.last_result(), None);

    // 关闭后再点同意不会发请求
    assert_eq!(c.handle(UiEvent::ConsentAccepted).await, FlowOutcome::Updated);

    // 再次提交会重新打开弹窗，复选框已复位
    assert_eq!(c.handle(UiEvent::SubmitRequested).await, FlowOutcome::AwaitingConsent);
    let view = c.ui().last_consent().unwrap();
    assert!(view.open);
    assert!(!view.checkbox_checked);
    assert!(!view.accept_enabled);
}

#[tokio::test]
async fn test_consent_is_asked_only_once() {
    let c = coordinator(FakeTransport::responding(200, REPORT_BODY));
    c.select_file(Some(pdf_of_size(1024)));
    assert!(matches!(submit_with_consent(&c).await, FlowOutcome::Completed(_)));

    let consent_updates = |c: &common::TestCoordinator| {
        c.ui()
            .calls()
            .into_iter()
            .filter(|call| matches!(call, UiCall::UpdateConsent(_)))
            .count()
    };
    let before = consent_updates(&c);

    assert!(matches!(
        c.handle(UiEvent::SubmitRequested).await,
        FlowOutcome::Completed(_)
    ));
    assert_eq!(consent_updates(&c), before);
    assert_eq!(c.transport().calls(), 2);
    assert_eq!(c.consent_state(), ConsentState::Granted);
}

#[tokio::test]
async fn test_double_submit_while_in_flight_dispatches_once() {
    let release = Arc::new(Notify::new());
    let c = coordinator(FakeTransport::blocking(200, REPORT_BODY, release.clone()));
    c.select_file(Some(pdf_of_size(1024)));

    assert_eq!(c.handle(UiEvent::SubmitRequested).await, FlowOutcome::AwaitingConsent);
    c.handle(UiEvent::ConsentCheckboxToggled(true)).await;

    let first = c.handle(UiEvent::ConsentAccepted);
    let second = async {
        while c.transport().calls() == 0 {
            tokio::task::yield_now().await;
        }
        assert!(c.is_submitting());
        let outcome = c.handle(UiEvent::SubmitRequested).await;
        release.notify_one();
        outcome
    };

    let (first, second) = tokio::join!(first, second);

    assert!(matches!(first, FlowOutcome::Completed(EvaluationResult::Report { .. })));
    assert_eq!(second, FlowOutcome::Busy);
    assert_eq!(c.transport().calls(), 1);
    assert!(!c.is_submitting());
    assert_eq!(c.ui().submit_toggles(), vec![false, true]);
}

#[tokio::test]
async fn test_server_error_detail_is_displayed() {
    let c = coordinator(FakeTransport::responding(
        422,
        r#"{"detail":"Could not extract text from PDF"}"#,
    ));
    c.select_file(Some(pdf_of_size(1024)));

    let outcome = submit_with_consent(&c).await;
    assert_eq!(
        outcome,
        FlowOutcome::Completed(EvaluationResult::Failed {
            message: "Could not extract text from PDF".into()
        })
    );
    let view = c.ui().last_result().unwrap();
    assert_eq!(view.status_line, "Error: Could not extract text from PDF");
    assert!(!view.scroll_into_view);
    assert_eq!(c.ui().submit_toggles(), vec![false, true]);
}

#[tokio::test]
async fn test_unparsable_error_body_falls_back() {
    let c = coordinator(FakeTransport::responding(500, "Internal Server Error"));
    c.select_file(Some(pdf_of_size(1024)));

    submit_with_consent(&c).await;
    assert_eq!(
        c.ui().last_result().unwrap().status_line,
        "Error: Upload failed"
    );
}

#[tokio::test]
async fn test_transport_failure_reenables_submit() {
    let c = coordinator(FakeTransport::failing());
    c.select_file(Some(pdf_of_size(1024)));

    let outcome = submit_with_consent(&c).await;
    assert_eq!(
        outcome,
        FlowOutcome::Completed(EvaluationResult::Failed {
            message: "Upload failed".into()
        })
    );
    assert!(!c.is_submitting());
    assert_eq!(c.ui().submit_toggles(), vec![false, true]);

    // 失败后可以再次提交，不会自动重试
    assert!(matches!(
        c.handle(UiEvent::SubmitRequested).await,
        FlowOutcome::Completed(_)
    ));
    assert_eq!(c.transport().calls(), 2);
}

#[tokio::test]
async fn test_question_events_shape_payload() {
    let c = coordinator(FakeTransport::responding(200, REPORT_BODY));
    c.initialize_questions(&[QuestionDefault::new("Seeded", "5")]);

    let blank = c.add_question();
    let weight_only = c.add_question();
    let removed = c.add_question();
    c.handle(UiEvent::QuestionEdited {
        id: weight_only,
        text: String::new(),
        weight: "0".into(),
    })
    .await;
    c.handle(UiEvent::QuestionRemoved(removed)).await;
    c.handle(UiEvent::QuestionRemoved(999)).await;
    assert_eq!(c.question_rows().len(), 3);
    assert_eq!(c.question_rows()[1].id, blank);

    c.select_file(Some(pdf_of_size(1024)));
    submit_with_consent(&c).await;

    let request = &c.transport().requests()[0];
    assert_eq!(
        request.questions_data,
        r#"[{"question":"Seeded","weightage":5},{"question":"","weightage":0}]"#
    );
    assert_eq!(request.gender_weights, r#"{"male":0,"female":0}"#);

    // 新增行的标识不会复用已删除的
    assert_eq!(c.add_question(), removed + 1);
}

#[tokio::test]
async fn test_in_memory_pdf_selection() {
    let c = coordinator(FakeTransport::responding(200, REPORT_BODY));
    let file = SelectedFile::in_memory("cv.pdf", PDF_MIME_TYPE, b"%PDF-1.7".to_vec());
    assert_eq!(c.select_file(Some(file)), FlowOutcome::FileAccepted);
    assert_ok!(resume_evaluate_submit::services::validate(c.selected_file().as_ref()));

    let empty = SelectedFile::in_memory("empty.pdf", PDF_MIME_TYPE, Vec::new());
    assert_eq!(
        c.select_file(Some(empty)),
        FlowOutcome::FileRejected(FileRejection::Empty)
    );
    assert_err!(resume_evaluate_submit::services::validate(c.selected_file().as_ref()));
}
