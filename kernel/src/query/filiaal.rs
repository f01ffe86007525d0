use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Filiaal, FiliaalId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait FiliaalQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_all(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Filiaal>, KernelError>;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &FiliaalId,
    ) -> error_stack::Result<Option<Filiaal>, KernelError>;
}

pub trait DependOnFiliaalQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type FiliaalQuery: FiliaalQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn filiaal_query(&self) -> &Self::FiliaalQuery;
}
