//! In-memory stand-ins for the transaction runner and the two repositories.
//!
//! A transaction works on a private copy of the store; commit swaps the copy
//! in, rollback drops it. That keeps atomicity observable without Postgres.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::shared::persistence::{execute_guarded, TransactionError, TransactionRunner, UnitOfWork};
use crate::user::application::domain::entities::{
    NewProfile, NewUser, Profile, ProfileId, User, UserId,
};
use crate::user::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub users: BTreeMap<i32, User>,
    pub profiles: BTreeMap<i32, Profile>,
    next_user_id: i32,
    next_profile_id: i32,
}

impl StoreState {
    pub fn live_users(&self) -> Vec<&User> {
        self.users.values().filter(|u| !u.is_deleted()).collect()
    }
}

#[derive(Debug, Clone)]
pub struct MemoryScope {
    state: Arc<Mutex<StoreState>>,
    transactional: bool,
}

impl MemoryScope {
    pub fn is_transaction(&self) -> bool {
        self.transactional
    }

    fn with<R>(&self, f: impl FnOnce(&mut StoreState) -> R) -> R {
        let mut guard = self.state.lock().unwrap();
        f(&mut guard)
    }

    fn snapshot(&self) -> StoreState {
        self.with(|state| state.clone())
    }
}

//
// ──────────────────────────────────────────────────────────
// Transaction Runner
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
    begun: Arc<AtomicUsize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed state, as a reader outside any transaction sees it.
    pub fn snapshot(&self) -> StoreState {
        self.state.lock().unwrap().clone()
    }

    pub fn transactions_begun(&self) -> usize {
        self.begun.load(Ordering::SeqCst)
    }

    /// Inserts a user (and optionally its profile) without a transaction.
    pub fn seed(&self, name: &str, age: i32, with_profile: bool) -> UserId {
        let scope = self.scope();
        let user_id = insert_user(
            &scope,
            NewUser {
                name: name.to_string(),
                age,
            },
        );
        if with_profile {
            insert_profile(
                &scope,
                NewProfile {
                    user_id,
                    bio: format!("{} bio", name),
                    avatar_url: format!("https://img.example/{}.png", name),
                },
            );
        }
        user_id
    }
}

#[async_trait]
impl TransactionRunner for InMemoryStore {
    type Scope = MemoryScope;

    fn scope(&self) -> Self::Scope {
        MemoryScope {
            state: Arc::clone(&self.state),
            transactional: false,
        }
    }

    async fn run_within<T, E, F>(
        &self,
        outer: &Self::Scope,
        work: F,
    ) -> Result<T, TransactionError<E>>
    where
        T: Send,
        E: Send,
        F: for<'s> FnOnce(&'s Self::Scope) -> UnitOfWork<'s, T, E> + Send,
    {
        if outer.transactional {
            return execute_guarded(outer, work).await;
        }

        self.begun.fetch_add(1, Ordering::SeqCst);

        let scope = MemoryScope {
            state: Arc::new(Mutex::new(outer.snapshot())),
            transactional: true,
        };

        let outcome = execute_guarded(&scope, work).await;

        if outcome.is_ok() {
            let staged = scope.snapshot();
            outer.with(|state| *state = staged);
        }

        outcome
    }
}

//
// ──────────────────────────────────────────────────────────
// Repositories
// ──────────────────────────────────────────────────────────
//

fn insert_user(scope: &MemoryScope, user: NewUser) -> UserId {
    scope.with(|state| {
        state.next_user_id += 1;
        let id = state.next_user_id;
        let now = Some(Utc::now());
        state.users.insert(
            id,
            User {
                id: UserId::from(id),
                name: user.name,
                age: user.age,
                created_at: now,
                updated_at: now,
                deleted_at: None,
            },
        );
        UserId::from(id)
    })
}

fn insert_profile(scope: &MemoryScope, profile: NewProfile) -> ProfileId {
    scope.with(|state| {
        state.next_profile_id += 1;
        let id = state.next_profile_id;
        let now = Some(Utc::now());
        state.profiles.insert(
            id,
            Profile {
                id: ProfileId::from(id),
                user_id: profile.user_id,
                bio: profile.bio,
                avatar_url: profile.avatar_url,
                created_at: now,
                updated_at: now,
            },
        );
        ProfileId::from(id)
    })
}

fn page<T: Clone>(rows: Vec<&T>, limit: i64, offset: i64) -> Result<Vec<T>, String> {
    let limit = usize::try_from(limit).map_err(|_| "LIMIT must not be negative".to_string())?;
    let offset = usize::try_from(offset).map_err(|_| "OFFSET must not be negative".to_string())?;
    Ok(rows.into_iter().skip(offset).take(limit).cloned().collect())
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository;

#[async_trait]
impl UserRepository<MemoryScope> for InMemoryUserRepository {
    async fn create(&self, scope: &MemoryScope, user: NewUser) -> Result<UserId, UserRepositoryError> {
        Ok(insert_user(scope, user))
    }

    async fn update(&self, scope: &MemoryScope, user: &User) -> Result<(), UserRepositoryError> {
        scope.with(|state| match state.users.get_mut(&user.id.value()) {
            Some(row) if !row.is_deleted() => {
                row.name = user.name.clone();
                row.age = user.age;
                row.updated_at = Some(Utc::now());
                Ok(())
            }
            _ => Err(UserRepositoryError::NotFound),
        })
    }

    async fn delete(&self, scope: &MemoryScope, id: UserId) -> Result<(), UserRepositoryError> {
        scope.with(|state| {
            if let Some(row) = state.users.get_mut(&id.value()) {
                if !row.is_deleted() {
                    row.deleted_at = Some(Utc::now());
                }
            }
        });
        Ok(())
    }

    async fn get_one(&self, scope: &MemoryScope, id: UserId) -> Result<User, UserRepositoryError> {
        scope.with(|state| {
            state
                .users
                .get(&id.value())
                .filter(|u| !u.is_deleted())
                .cloned()
                .ok_or(UserRepositoryError::NotFound)
        })
    }

    async fn get_list(
        &self,
        scope: &MemoryScope,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<User>, UserRepositoryError> {
        let users = scope.with(|state| page(state.live_users(), limit, offset));
        match users {
            Ok(users) if users.is_empty() => Err(UserRepositoryError::NotFound),
            Ok(users) => Ok(users),
            Err(msg) => Err(UserRepositoryError::DatabaseError(msg)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ProfileFault {
    #[default]
    None,
    FailCreate,
    PanicOnCreate,
    FailUpdate,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    fault: ProfileFault,
}

impl InMemoryProfileRepository {
    pub fn with_fault(fault: ProfileFault) -> Self {
        Self { fault }
    }
}

#[async_trait]
impl ProfileRepository<MemoryScope> for InMemoryProfileRepository {
    async fn create(
        &self,
        scope: &MemoryScope,
        profile: NewProfile,
    ) -> Result<ProfileId, ProfileRepositoryError> {
        match self.fault {
            ProfileFault::FailCreate => Err(ProfileRepositoryError::DatabaseError(
                "profile insert failed".to_string(),
            )),
            ProfileFault::PanicOnCreate => panic!("profile insert panicked"),
            _ => Ok(insert_profile(scope, profile)),
        }
    }

    async fn update(
        &self,
        scope: &MemoryScope,
        profile: &Profile,
    ) -> Result<(), ProfileRepositoryError> {
        if self.fault == ProfileFault::FailUpdate {
            return Err(ProfileRepositoryError::DatabaseError(
                "profile update failed".to_string(),
            ));
        }

        scope.with(|state| match state.profiles.get_mut(&profile.id.value()) {
            Some(row) => {
                row.bio = profile.bio.clone();
                row.avatar_url = profile.avatar_url.clone();
                row.updated_at = Some(Utc::now());
                Ok(())
            }
            None => Err(ProfileRepositoryError::NotFound),
        })
    }

    async fn delete(&self, scope: &MemoryScope, id: ProfileId) -> Result<(), ProfileRepositoryError> {
        scope.with(|state| state.profiles.remove(&id.value()));
        Ok(())
    }

    async fn get_one(
        &self,
        scope: &MemoryScope,
        id: ProfileId,
    ) -> Result<Profile, ProfileRepositoryError> {
        scope.with(|state| {
            state
                .profiles
                .get(&id.value())
                .cloned()
                .ok_or(ProfileRepositoryError::NotFound)
        })
    }

    async fn get_by_user_id(
        &self,
        scope: &MemoryScope,
        user_id: UserId,
    ) -> Result<Profile, ProfileRepositoryError> {
        scope.with(|state| {
            state
                .profiles
                .values()
                .find(|p| p.user_id == user_id)
                .cloned()
                .ok_or(ProfileRepositoryError::NotFound)
        })
    }

    async fn get_list(
        &self,
        scope: &MemoryScope,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Profile>, ProfileRepositoryError> {
        let profiles = scope.with(|state| page(state.profiles.values().collect(), limit, offset));
        match profiles {
            Ok(profiles) if profiles.is_empty() => Err(ProfileRepositoryError::NotFound),
            Ok(profiles) => Ok(profiles),
            Err(msg) => Err(ProfileRepositoryError::DatabaseError(msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn committed_work_is_visible_outside() {
        let store = InMemoryStore::new();
        let users = InMemoryUserRepository;

        let result: Result<UserId, TransactionError<UserRepositoryError>> = store
            .run(move |scope| {
                Box::pin(async move {
                    users
                        .create(
                            scope,
                            NewUser {
                                name: "taro".to_string(),
                                age: 24,
                            },
                        )
                        .await
                })
            })
            .await;

        assert_eq!(result, Ok(UserId::from(1)));
        assert_eq!(store.snapshot().users.len(), 1);
        assert_eq!(store.transactions_begun(), 1);
    }

    #[tokio::test]
    async fn failed_work_leaves_store_untouched() {
        let store = InMemoryStore::new();
        let users = InMemoryUserRepository;

        let result: Result<(), TransactionError<UserRepositoryError>> = store
            .run(move |scope| {
                Box::pin(async move {
                    users
                        .create(
                            scope,
                            NewUser {
                                name: "taro".to_string(),
                                age: 24,
                            },
                        )
                        .await?;
                    Err::<(), UserRepositoryError>(UserRepositoryError::DatabaseError(
                        "late failure".to_string(),
                    ))
                })
            })
            .await;

        assert!(matches!(result, Err(TransactionError::Work(_))));
        assert!(store.snapshot().users.is_empty());
    }

    #[tokio::test]
    async fn nested_run_joins_outer_transaction() {
        let store = InMemoryStore::new();
        let inner_store = store.clone();

        assert!(!store.scope().is_transaction());

        let result: Result<bool, TransactionError<String>> = store
            .run(move |outer| {
                Box::pin(async move {
                    let joined: Result<bool, TransactionError<String>> = inner_store
                        .run_within(outer, |inner| {
                            Box::pin(async move { Ok(inner.is_transaction()) })
                        })
                        .await;
                    joined.map_err(|e| e.to_string())
                })
            })
            .await;

        assert_eq!(result, Ok(true));
        assert_eq!(store.transactions_begun(), 1);
    }

    #[tokio::test]
    async fn list_skips_soft_deleted_rows() {
        let store = InMemoryStore::new();
        let users = InMemoryUserRepository;
        let first = store.seed("a", 1, false);
        store.seed("b", 2, false);
        let scope = store.scope();

        users.delete(&scope, first).await.unwrap();
        let listed = users.get_list(&scope, 10, 0).await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "b");
    }
}
