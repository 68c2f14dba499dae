//! When steps for task board BDD scenarios.

use super::world::{BoardWorld, run_async};
use mockable::DefaultClock;
use rstest_bdd_macros::when;
use std::sync::Arc;
use taskboard::{
    app::DashboardPage,
    board::{
        domain::TaskStatus,
        services::{StatusSelect, TaskDraft},
    },
};

/// Fills and confirms the create dialog on the open dashboard.
///
/// # Errors
///
/// Returns an error if the dashboard is closed or the draft is invalid.
pub(super) fn add_task(
    world: &mut BoardWorld,
    title: String,
    date: String,
    description: String,
) -> Result<(), eyre::Report> {
    let page = world.dashboard_mut()?;
    page.create_form_mut().open();
    *page.create_form_mut().draft_mut() = TaskDraft {
        title,
        date,
        description,
        status: TaskStatus::ToDo,
    };
    run_async(page.add_task())?;
    Ok(())
}

#[when(r#"the user adds a task titled "{title}" due "{date}" described as "{description}""#)]
fn user_adds_task(
    world: &mut BoardWorld,
    title: String,
    date: String,
    description: String,
) -> Result<(), eyre::Report> {
    add_task(world, title, date, description)
}

#[when(r#"the user changes the status of "{title}" to "{status}""#)]
fn user_changes_status(
    world: &mut BoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let status = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let task = world
        .find_task(&title)?
        .ok_or_else(|| eyre::eyre!("task {title} is not on the board"))?;
    run_async(
        world
            .dashboard()?
            .select_status(&StatusSelect::for_task(&task), status),
    );
    Ok(())
}

#[when(r#"the user deletes the task "{title}""#)]
fn user_deletes_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task = world
        .find_task(&title)?
        .ok_or_else(|| eyre::eyre!("task {title} is not on the board"))?;
    run_async(world.dashboard()?.delete_task(task.id()));
    Ok(())
}

#[when("the visitor opens the dashboard")]
fn visitor_opens_dashboard(world: &mut BoardWorld) {
    let mount = run_async(DashboardPage::mount(
        world.client.clone(),
        Arc::new(DefaultClock),
    ));
    world.last_redirect = mount.redirect();
}
