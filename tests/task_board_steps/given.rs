//! Given steps for task board BDD scenarios.

use super::{
    when::add_task,
    world::{BoardWorld, run_async},
};
use crate::test_helpers::register_and_sign_in;
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use std::sync::Arc;
use taskboard::{
    app::{DashboardPage, Mount},
    board::domain::{PersistedTaskData, TaskDate, TaskId},
};

#[given(r#"a signed-in user "{email}""#)]
fn signed_in_user(world: &mut BoardWorld, email: String) -> Result<(), eyre::Report> {
    let session = run_async(register_and_sign_in(world.client.auth(), &email, "hunter2"))
        .wrap_err("sign in scenario user")?;
    world.user_id = Some(session.user().id());
    Ok(())
}

#[given("no user is signed in")]
fn no_user_signed_in(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.client.auth().invalidate_session()?;
    world.user_id = None;
    Ok(())
}

#[given("the dashboard is open")]
fn dashboard_is_open(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    match run_async(DashboardPage::mount(
        world.client.clone(),
        Arc::new(DefaultClock),
    )) {
        Mount::Ready(page) => {
            world.dashboard = Some(page);
            Ok(())
        }
        Mount::Redirect(route) => Err(eyre::eyre!("dashboard redirected to {route}")),
    }
}

#[given(r#"the store holds a task "{title}" with status "{status}" for that user"#)]
fn store_holds_task(world: &mut BoardWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let user_id = world
        .user_id
        .ok_or_else(|| eyre::eyre!("missing signed-in user in scenario world"))?;
    world.client.store().inner().put_row(PersistedTaskData {
        id: TaskId::new(500),
        title,
        description: String::new(),
        status,
        date: TaskDate::parse("2024-04-01")?,
        user_id,
    })?;
    Ok(())
}

#[given("the store rejects writes")]
fn store_rejects_writes(world: &mut BoardWorld) {
    world.client.store().fail_writes(true);
}

#[given(r#"the user adds a task titled "{title}" due "{date}" described as "{description}""#)]
fn user_has_added_task(
    world: &mut BoardWorld,
    title: String,
    date: String,
    description: String,
) -> Result<(), eyre::Report> {
    add_task(world, title, date, description)
}
