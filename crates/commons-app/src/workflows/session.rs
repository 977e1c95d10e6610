//! Session workflows: the auth flow from loading to authenticated.

use parking_lot::RwLock;
use std::sync::Arc;

use commons_core::ViewerProfile;

use crate::core::{AppCore, DispatchOutcome, Intent};

/// The loading screen finished.
pub fn complete_loading(core: &Arc<RwLock<AppCore>>) -> DispatchOutcome {
    core.write().dispatch(Intent::LoadComplete)
}

/// Switch the login screen to registration.
pub fn begin_registration(core: &Arc<RwLock<AppCore>>) -> DispatchOutcome {
    core.write().dispatch(Intent::GoToRegistration)
}

/// Return from registration to login.
pub fn back_to_login(core: &Arc<RwLock<AppCore>>) -> DispatchOutcome {
    core.write().dispatch(Intent::BackToLogin)
}

/// Complete login with the viewer's identity.
pub fn login(core: &Arc<RwLock<AppCore>>, profile: ViewerProfile) -> DispatchOutcome {
    core.write().dispatch(Intent::LoginComplete { profile })
}

/// Complete registration with the viewer's identity.
pub fn register(core: &Arc<RwLock<AppCore>>, profile: ViewerProfile) -> DispatchOutcome {
    core.write()
        .dispatch(Intent::RegistrationComplete { profile })
}
