use super::{
    repository::AuthRepository,
    utils::{build_register_request, AuthMode, LoginFormState, RegisterFormState},
};
use crate::{
    api::{ApiError, LoginRequest, RegisterRequest},
    state::session::{use_api_client, use_session_store},
    utils::navigation,
};
use leptos::*;
use std::rc::Rc;

/// What the single submit action was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthSubmission {
    Login(LoginRequest),
    Register(RegisterRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    LoggedIn(&'static str),
    Registered(String),
}

#[derive(Clone, Copy)]
pub struct AuthViewModel {
    pub mode: RwSignal<AuthMode>,
    pub login: LoginFormState,
    pub register: RegisterFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub submit_action: Action<AuthSubmission, Result<AuthOutcome, ApiError>>,
}

impl AuthViewModel {
    pub fn pending(&self) -> Signal<bool> {
        self.submit_action.pending().into()
    }

    pub fn toggle_mode(&self) {
        self.error.set(None);
        self.mode.update(|mode| *mode = mode.toggled());
    }

    pub fn submit_login(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        match self.login.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.submit_action.dispatch(AuthSubmission::Login(request));
            }
            Err(err) => self.error.set(Some(err)),
        }
    }

    pub fn submit_register(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        match build_register_request(&self.register.snapshot()) {
            Ok(request) => {
                self.error.set(None);
                self.submit_action.dispatch(AuthSubmission::Register(request));
            }
            Err(err) => self.error.set(Some(err)),
        }
    }

    fn apply_outcome(&self, outcome: AuthOutcome) {
        match outcome {
            AuthOutcome::LoggedIn(target) => navigation::navigate_to(target),
            AuthOutcome::Registered(user) => {
                self.register.reset();
                self.login.prefill(user);
                self.mode.set(AuthMode::Login);
            }
        }
    }
}

pub fn use_auth_view_model() -> AuthViewModel {
    let repository = AuthRepository::new_with_client(Rc::new(use_api_client()), use_session_store());
    use_auth_view_model_with(repository)
}

pub fn use_auth_view_model_with(repository: AuthRepository) -> AuthViewModel {
    let submit_action = create_action(move |submission: &AuthSubmission| {
        let repository = repository.clone();
        let submission = submission.clone();
        async move {
            match submission {
                AuthSubmission::Login(request) => {
                    repository.login(request).await.map(AuthOutcome::LoggedIn)
                }
                AuthSubmission::Register(request) => {
                    repository.register(request).await.map(AuthOutcome::Registered)
                }
            }
        }
    });

    let vm = AuthViewModel {
        mode: create_rw_signal(AuthMode::Login),
        login: LoginFormState::default(),
        register: RegisterFormState::default(),
        error: create_rw_signal(None::<ApiError>),
        submit_action,
    };

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(outcome) => vm.apply_outcome(outcome),
                Err(err) => vm.error.set(Some(err)),
            }
        }
    });

    vm
}
