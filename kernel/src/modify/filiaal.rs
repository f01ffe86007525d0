use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Filiaal, FiliaalId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait FiliaalModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    // Ignores the id of `filiaal`; the store generates one.
    async fn create(
        &self,
        con: &mut Self::Transaction,
        filiaal: &Filiaal,
    ) -> error_stack::Result<FiliaalId, KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        filiaal: &Filiaal,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(
        &self,
        con: &mut Self::Transaction,
        filiaal_id: &FiliaalId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnFiliaalModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type FiliaalModifier: FiliaalModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn filiaal_modifier(&self) -> &Self::FiliaalModifier;
}
