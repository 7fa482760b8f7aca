use anyhow::{bail, Result};
use chrono::Utc;

use eventdesk_core::auth::Identity;

use crate::seed::generate_seed_events;
use crate::session::SessionStore;
use crate::store::EventStore;

/// Signs in, recording the identity snapshot. A fresh (empty) collection is
/// seeded with demo events through `bulk_import`.
pub fn login(
    store: &mut EventStore,
    session: &mut SessionStore,
    name: String,
    email: String,
) -> Result<()> {
    let identity = Identity::new(name, email);
    session.login(identity.clone())?;

    if store.is_empty() {
        let seeded = generate_seed_events(&identity.to_organizer(), Utc::now().date_naive());
        let count = seeded.len();
        store.bulk_import(seeded);
        println!(
            "Signed in as {} <{}>; seeded {count} demo events.",
            identity.user_name, identity.email
        );
    } else {
        println!("Signed in as {} <{}>.", identity.user_name, identity.email);
    }
    Ok(())
}

/// Signs out and clears the local collection.
pub fn logout(store: &mut EventStore, session: &mut SessionStore) -> Result<()> {
    if session.current().is_none() {
        bail!("not signed in");
    }
    session.logout();
    store.clear();
    println!("Signed out; local events cleared.");
    Ok(())
}

/// Appends the demo events to the current collection.
pub fn seed(store: &mut EventStore, session: &SessionStore) -> Result<()> {
    let Some(identity) = session.current() else {
        bail!("not signed in; run `eventdesk login` first");
    };

    let seeded = generate_seed_events(&identity.to_organizer(), Utc::now().date_naive());
    let count = seeded.len();
    store.bulk_import(seeded);
    println!("Seeded {count} demo events.");
    Ok(())
}
