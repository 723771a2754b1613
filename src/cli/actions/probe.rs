use crate::{
    cli::{actions::Action, globals::GlobalArgs},
    client::ApiClient,
    config::ClientConfig,
    features::{
        auth::{form::SignInForm, state::SessionStore},
        community, map, moderation, transit,
    },
};
use anyhow::{Result, anyhow};

/// Handle a probe action against the configured API.
/// # Errors
/// Returns an error if the client cannot be built or the request fails.
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    let config = ClientConfig::new(globals.api_url.clone());
    let store = SessionStore::new();
    let api = ApiClient::new(&config, store.clone())?;

    let payload = match action {
        Action::Discussions => community::client::list_discussions(&api).await?,
        Action::Members => community::client::list_members(&api).await?,
        Action::Traffic {
            location: Some(location),
        } => map::client::traffic_at(&api, &location).await?,
        Action::Traffic { location: None } => map::client::traffic(&api).await?,
        Action::Environmental {
            location: Some(location),
        } => map::client::environmental_at(&api, &location).await?,
        Action::Environmental { location: None } => map::client::environmental(&api).await?,
        Action::Transit => transit::client::overview(&api).await?,
        Action::Route { id } => transit::client::route(&api, &id).await?,
        Action::Vehicle { id } => transit::client::vehicle(&api, &id).await?,
        Action::Alerts => transit::client::alerts(&api).await?,
        Action::Flags { status } => moderation::client::list_flags(&api, &status).await?,
        Action::Login { email, password } => {
            let form = SignInForm::new();
            form.set_email(email);
            form.set_password(password);

            return match form.submit(&api, &store).await {
                Some(destination) => {
                    let session = store
                        .session()
                        .ok_or_else(|| anyhow!("session missing after sign-in"))?;
                    println!(
                        "signed in as {} ({}), landing at {}",
                        session.user.full_name,
                        session.user.user_type,
                        destination.path()
                    );
                    Ok(())
                }
                None => Err(anyhow!(form
                    .error()
                    .unwrap_or_else(|| "sign-in failed".to_string()))),
            };
        }
    };

    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}
