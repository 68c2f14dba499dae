//! Session flows across the auth and dashboard pages.

use crate::test_helpers::{TestClient, fresh_client};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::sync::Arc;
use taskboard::{
    app::{AuthPage, DashboardPage, Mount, resolve_landing},
    auth::{
        domain::{Email, Route},
        services::{AuthFormOutcome, AuthMode, CONFIRMATION_NOTICE},
    },
};

#[fixture]
fn client() -> TestClient {
    fresh_client()
}

async fn submit(
    client: &TestClient,
    mode: AuthMode,
    email: &str,
    password: &str,
) -> Result<(AuthFormOutcome, Option<String>), eyre::Report> {
    let Mount::Ready(mut page) = AuthPage::mount(client.clone(), mode).await else {
        return Err(eyre::eyre!("{} page redirected", mode.title()));
    };
    page.form_mut().email = email.to_owned();
    page.form_mut().password = password.to_owned();
    let outcome = page.submit().await;
    Ok((outcome, page.form().error().map(str::to_owned)))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sign_up_then_confirm_then_sign_in(client: TestClient) -> Result<(), eyre::Report> {
    let Mount::Ready(mut page) = AuthPage::mount(client.clone(), AuthMode::SignUp).await else {
        return Err(eyre::eyre!("sign-up page redirected"));
    };
    page.form_mut().email = "carol@example.com".to_owned();
    page.form_mut().password = "pa55word".to_owned();
    eyre::ensure!(page.submit().await == AuthFormOutcome::ConfirmationPending);
    eyre::ensure!(page.form().notice() == Some(CONFIRMATION_NOTICE));
    eyre::ensure!(page.render()?.contains(CONFIRMATION_NOTICE));
    eyre::ensure!(resolve_landing(&client).await == Route::SignIn);

    let (outcome, error) =
        submit(&client, AuthMode::SignIn, "carol@example.com", "pa55word").await?;
    eyre::ensure!(outcome == AuthFormOutcome::Rejected);
    eyre::ensure!(error.as_deref() == Some("Email not confirmed"));

    client.auth().confirm_email(&Email::new("carol@example.com")?)?;
    let (outcome, _) = submit(&client, AuthMode::SignIn, "carol@example.com", "pa55word").await?;
    eyre::ensure!(outcome == AuthFormOutcome::Redirect(Route::Dashboard));
    eyre::ensure!(resolve_landing(&client).await == Route::Dashboard);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn expired_session_sends_dashboard_to_sign_in(
    client: TestClient,
) -> Result<(), eyre::Report> {
    crate::test_helpers::register_and_sign_in(client.auth(), "dave@example.com", "pw").await?;
    client.auth().invalidate_session()?;

    let mount = DashboardPage::mount(client.clone(), Arc::new(DefaultClock)).await;

    eyre::ensure!(mount.redirect() == Some(Route::SignIn));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn logout_ends_the_session(client: TestClient) -> Result<(), eyre::Report> {
    crate::test_helpers::register_and_sign_in(client.auth(), "erin@example.com", "pw").await?;
    let Mount::Ready(page) = DashboardPage::mount(client.clone(), Arc::new(DefaultClock)).await
    else {
        return Err(eyre::eyre!("dashboard redirected"));
    };

    eyre::ensure!(page.log_out().await == Some(Route::SignIn));
    let again = DashboardPage::mount(client.clone(), Arc::new(DefaultClock)).await;
    eyre::ensure!(again.redirect() == Some(Route::SignIn));
    Ok(())
}
