//! Board round trips through the dashboard page.

use crate::test_helpers::{FlakyStore, TestAuth, TestClient, fresh_client, register_and_sign_in};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::sync::Arc;
use taskboard::{
    app::{DashboardPage, Mount},
    board::{
        domain::{TaskId, TaskStatus},
        ports::TaskStore,
        services::{EditTaskForm, StatusSelect, TaskDraft},
    },
};

type Page = DashboardPage<TestAuth, FlakyStore, DefaultClock>;

#[fixture]
fn client() -> TestClient {
    fresh_client()
}

async fn open_dashboard(client: &TestClient, email: &str) -> Result<Page, eyre::Report> {
    register_and_sign_in(client.auth(), email, "hunter2").await?;
    match DashboardPage::mount(client.clone(), Arc::new(DefaultClock)).await {
        Mount::Ready(page) => Ok(page),
        Mount::Redirect(route) => Err(eyre::eyre!("dashboard redirected to {route}")),
    }
}

async fn add(page: &mut Page, title: &str, status: TaskStatus) -> Result<TaskId, eyre::Report> {
    page.create_form_mut().open();
    *page.create_form_mut().draft_mut() = TaskDraft {
        title: title.to_owned(),
        date: "2024-01-01".to_owned(),
        description: "2%".to_owned(),
        status,
    };
    page.add_task().await?;
    page.board()
        .tasks()?
        .iter()
        .find(|task| task.title() == title)
        .map(|task| task.id())
        .ok_or_else(|| eyre::eyre!("task {title} missing after create"))
}

fn column_of(page: &Page, id: TaskId) -> Result<Vec<TaskStatus>, eyre::Report> {
    Ok(page
        .board()
        .with_columns(|columns| columns.columns_containing(id))?)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn buy_milk_moves_from_to_do_to_completed(client: TestClient) -> Result<(), eyre::Report> {
    let mut page = open_dashboard(&client, "alice@example.com").await?;

    let id = add(&mut page, "Buy milk", TaskStatus::ToDo).await?;
    eyre::ensure!(column_of(&page, id)? == vec![TaskStatus::ToDo]);
    let html = page.render()?;
    eyre::ensure!(html.contains("January 1, 2024"), "card shows long date");

    let task = page
        .board()
        .tasks()?
        .into_iter()
        .find(|task| task.id() == id)
        .ok_or_else(|| eyre::eyre!("task missing"))?;
    page.select_status(&StatusSelect::for_task(&task), TaskStatus::Completed)
        .await;

    eyre::ensure!(column_of(&page, id)? == vec![TaskStatus::Completed]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_replaces_all_fields(client: TestClient) -> Result<(), eyre::Report> {
    let mut page = open_dashboard(&client, "alice@example.com").await?;
    let id = add(&mut page, "Draft report", TaskStatus::InProgress).await?;
    let task = page
        .board()
        .tasks()?
        .into_iter()
        .find(|task| task.id() == id)
        .ok_or_else(|| eyre::eyre!("task missing"))?;
    let mut form = EditTaskForm::for_task(&task)?;
    form.open();
    form.draft_mut().title = "Final report".to_owned();
    form.draft_mut().date = "2024-02-29".to_owned();
    form.draft_mut().status = TaskStatus::OnHold;

    page.save_edit(&mut form).await?;

    let updated = page
        .board()
        .tasks()?
        .into_iter()
        .find(|task| task.id() == id)
        .ok_or_else(|| eyre::eyre!("task missing"))?;
    eyre::ensure!(updated.title() == "Final report");
    eyre::ensure!(updated.date().long_form() == "February 29, 2024");
    eyre::ensure!(updated.status() == Some(TaskStatus::OnHold));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_delete_keeps_card_in_place(client: TestClient) -> Result<(), eyre::Report> {
    let mut page = open_dashboard(&client, "alice@example.com").await?;
    let id = add(&mut page, "Stubborn", TaskStatus::OnHold).await?;
    client.store().fail_writes(true);

    page.delete_task(id).await;

    eyre::ensure!(column_of(&page, id)? == vec![TaskStatus::OnHold]);
    client.store().fail_writes(false);
    page.delete_task(id).await;
    eyre::ensure!(column_of(&page, id)?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn users_never_see_each_others_tasks(client: TestClient) -> Result<(), eyre::Report> {
    let mut alice = open_dashboard(&client, "alice@example.com").await?;
    add(&mut alice, "Alice only", TaskStatus::ToDo).await?;
    let alice_id = alice.user().id();

    let mut bob = open_dashboard(&client, "bob@example.com").await?;
    add(&mut bob, "Bob only", TaskStatus::ToDo).await?;

    eyre::ensure!(bob.board().tasks()?.len() == 1, "bob sees only his task");
    let alice_rows = client.store().list_by_user(&alice_id).await?;
    eyre::ensure!(alice_rows.len() == 1);
    eyre::ensure!(client.store().inner().row_count()? == 2);
    Ok(())
}
