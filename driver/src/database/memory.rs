use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::DependOnFiliaalQuery;
use kernel::interface::update::DependOnFiliaalModifier;
use kernel::prelude::entity::{Filiaal, FiliaalId};
use kernel::KernelError;

pub use self::filiaal::*;

mod filiaal;

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    filialen: BTreeMap<FiliaalId, Filiaal>,
    last_id: i64,
}

impl InMemoryStore {
    fn next_id(&mut self) -> FiliaalId {
        self.last_id += 1;
        FiliaalId::new(self.last_id)
    }
}

// Transactions are serialized: each one holds the store until it ends.
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    store: Arc<Mutex<InMemoryStore>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

pub struct InMemoryConnection {
    store: OwnedMutexGuard<InMemoryStore>,
    snapshot: Option<InMemoryStore>,
}

impl InMemoryConnection {
    // Snapshot on first write so read-only transactions never copy the store.
    fn store_mut(&mut self) -> &mut InMemoryStore {
        if self.snapshot.is_none() {
            self.snapshot = Some(InMemoryStore::clone(&self.store));
        }
        &mut self.store
    }
}

impl Drop for InMemoryConnection {
    fn drop(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            *self.store = snapshot;
        }
    }
}

#[async_trait::async_trait]
impl Transaction for InMemoryConnection {
    async fn commit(mut self) -> error_stack::Result<(), KernelError> {
        self.snapshot = None;
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryConnection;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let store = Arc::clone(&self.store).lock_owned().await;
        Ok(InMemoryConnection {
            store,
            snapshot: None,
        })
    }
}

impl DependOnFiliaalQuery for InMemoryDatabase {
    type FiliaalQuery = InMemoryFiliaalRepository;
    fn filiaal_query(&self) -> &Self::FiliaalQuery {
        &InMemoryFiliaalRepository
    }
}

impl DependOnFiliaalModifier for InMemoryDatabase {
    type FiliaalModifier = InMemoryFiliaalRepository;
    fn filiaal_modifier(&self) -> &Self::FiliaalModifier {
        &InMemoryFiliaalRepository
    }
}
