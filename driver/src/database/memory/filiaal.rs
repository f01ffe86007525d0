use kernel::interface::query::FiliaalQuery;
use kernel::interface::update::FiliaalModifier;
use kernel::prelude::entity::{Filiaal, FiliaalId};
use kernel::KernelError;

use crate::database::memory::InMemoryConnection;

pub struct InMemoryFiliaalRepository;

#[async_trait::async_trait]
impl FiliaalQuery for InMemoryFiliaalRepository {
    type Transaction = InMemoryConnection;

    async fn find_all(
        &self,
        con: &mut InMemoryConnection,
    ) -> error_stack::Result<Vec<Filiaal>, KernelError> {
        Ok(con.store.filialen.values().cloned().collect())
    }

    async fn find_by_id(
        &self,
        con: &mut InMemoryConnection,
        id: &FiliaalId,
    ) -> error_stack::Result<Option<Filiaal>, KernelError> {
        Ok(con.store.filialen.get(id).cloned())
    }
}

#[async_trait::async_trait]
impl FiliaalModifier for InMemoryFiliaalRepository {
    type Transaction = InMemoryConnection;

    async fn create(
        &self,
        con: &mut InMemoryConnection,
        filiaal: &Filiaal,
    ) -> error_stack::Result<FiliaalId, KernelError> {
        let store = con.store_mut();
        let id = store.next_id();
        store.filialen.insert(id, filiaal.clone().with_id(id));
        Ok(id)
    }

    async fn update(
        &self,
        con: &mut InMemoryConnection,
        filiaal: &Filiaal,
    ) -> error_stack::Result<(), KernelError> {
        if let Some(stored) = con.store_mut().filialen.get_mut(filiaal.id()) {
            *stored = filiaal.clone();
        }
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut InMemoryConnection,
        filiaal_id: &FiliaalId,
    ) -> error_stack::Result<(), KernelError> {
        con.store_mut().filialen.remove(filiaal_id);
        Ok(())
    }
}
