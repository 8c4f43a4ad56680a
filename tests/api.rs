mod helpers;

use actix_web::rt::time::sleep;
use helpers::setup::{spawn_app, spawn_app_with_reminders, TestApp};
use note_reminders_api_structs::{dtos::ReminderDTO, *};
use note_reminders_domain::{NewReminder, ID};
use reqwest::StatusCode;
use serde_json::json;
use std::time::Duration;

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

async fn post_reminder(app: &TestApp, note_id: i64, name: &str, date: i64) -> ReminderDTO {
    let res = reqwest::Client::new()
        .post(format!("{}/notes/{}/reminders", app.address, note_id))
        .json(&json!({ "name": name, "date": date }))
        .send()
        .await
        .expect("Expected to send request");
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json::<create_reminder::APIResponse>()
        .await
        .expect("Expected reminder response")
        .reminder
}

async fn get_reminder_status(app: &TestApp, reminder_id: &ID) -> StatusCode {
    reqwest::get(format!("{}/reminders/{}", app.address, reminder_id))
        .await
        .expect("Expected to send request")
        .status()
}

/// Waits for the alarm timers to deliver `count` notifications
async fn wait_for_notifications(app: &TestApp, count: usize) {
    for _ in 0..300 {
        if app.notifications.notifications().len() >= count {
            return;
        }
        sleep(Duration::from_millis(10)).await;
    }
}

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let app = spawn_app().await;
    let res = reqwest::get(format!("{}/", app.address))
        .await
        .expect("Expected to send request");
    assert!(res.status().is_success());

    let health = res
        .json::<get_service_health::APIResponse>()
        .await
        .expect("Expected health response");
    assert!(health.alarms_available);
    assert!(health.notifications_available);
}

#[actix_web::main]
#[test]
async fn test_reminder_lifecycle() {
    let app = spawn_app().await;
    let date = now() + 3600;
    let reminder = post_reminder(&app, 1, "Dentist", date).await;
    assert_eq!(reminder.note_id, ID::new(1));
    assert_eq!(reminder.name, "Dentist");
    assert_eq!(reminder.date, date);

    let res = reqwest::get(format!("{}/reminders/{}", app.address, reminder.id))
        .await
        .expect("Expected to send request")
        .json::<get_reminder::APIResponse>()
        .await
        .expect("Expected reminder response");
    assert_eq!(res.reminder, reminder);

    let res = reqwest::Client::new()
        .put(format!("{}/reminders/{}", app.address, reminder.id))
        .json(&json!({ "name": "Dentist at 9", "date": date + 60 }))
        .send()
        .await
        .expect("Expected to send request")
        .json::<update_reminder::APIResponse>()
        .await
        .expect("Expected reminder response");
    assert_eq!(res.reminder.name, "Dentist at 9");
    assert_eq!(res.reminder.date, date + 60);

    let res = reqwest::Client::new()
        .delete(format!("{}/reminders/{}", app.address, reminder.id))
        .send()
        .await
        .expect("Expected to send request");
    assert!(res.status().is_success());

    assert_eq!(
        get_reminder_status(&app, &reminder.id).await,
        StatusCode::NOT_FOUND
    );
    let res = reqwest::Client::new()
        .delete(format!("{}/reminders/{}", app.address, reminder.id))
        .send()
        .await
        .expect("Expected to send request");
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::main]
#[test]
async fn test_rejects_negative_date() {
    let app = spawn_app().await;
    let res = reqwest::Client::new()
        .post(format!("{}/notes/1/reminders", app.address))
        .json(&json!({ "name": "Dentist", "date": -1 }))
        .send()
        .await
        .expect("Expected to send request");
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::main]
#[test]
async fn test_note_reminders() {
    let app = spawn_app().await;
    let date = now() + 3600;
    let first = post_reminder(&app, 1, "First", date).await;
    let second = post_reminder(&app, 1, "Second", date).await;
    let other = post_reminder(&app, 2, "Other", date).await;

    let res = reqwest::get(format!("{}/notes/1/reminders", app.address))
        .await
        .expect("Expected to send request")
        .json::<get_note_reminders::APIResponse>()
        .await
        .expect("Expected reminders response");
    assert_eq!(res.reminders, vec![first.clone(), second.clone()]);

    let res = reqwest::Client::new()
        .delete(format!("{}/notes/1/reminders", app.address))
        .send()
        .await
        .expect("Expected to send request")
        .json::<delete_note_reminders::APIResponse>()
        .await
        .expect("Expected reminders response");
    assert_eq!(res.reminders, vec![first.clone(), second.clone()]);

    assert_eq!(
        get_reminder_status(&app, &first.id).await,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        get_reminder_status(&app, &second.id).await,
        StatusCode::NOT_FOUND
    );
    assert_eq!(get_reminder_status(&app, &other.id).await, StatusCode::OK);
}

#[actix_web::main]
#[test]
async fn test_due_reminder_fires_once_and_is_retired() {
    let app = spawn_app().await;
    let reminder = post_reminder(&app, 5, "Take out the trash", now() - 5).await;

    wait_for_notifications(&app, 1).await;
    // Give a duplicate fire the chance to show up
    sleep(Duration::from_millis(100)).await;

    let notifications = app.notifications.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].trigger_id, reminder.id);
    assert_eq!(notifications[0].title, app.config.notification_title);
    assert_eq!(notifications[0].body, "Take out the trash");
    assert_eq!(notifications[0].action.to_uri(), "notes://editor/5");

    assert_eq!(
        get_reminder_status(&app, &reminder.id).await,
        StatusCode::NOT_FOUND
    );
}

#[actix_web::main]
#[test]
async fn test_startup_recovery() {
    let now = now();
    let app = spawn_app_with_reminders(vec![
        NewReminder {
            note_id: ID::new(1),
            name: "Missed while offline".into(),
            date: now - 3600,
        },
        NewReminder {
            note_id: ID::new(1),
            name: "Tomorrow".into(),
            date: now + 24 * 3600,
        },
    ])
    .await;

    let reminders = app.ctx.repos.reminders.find_all().await.unwrap();
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].name, "Tomorrow");

    // The stale reminder is never fired late
    sleep(Duration::from_millis(100)).await;
    assert!(app.notifications.notifications().is_empty());
}
