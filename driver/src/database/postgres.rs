use std::ops::{Deref, DerefMut};

use error_stack::{Report, ResultExt};
use sqlx::migrate::MigrateError;
use sqlx::{Error, PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::DependOnFiliaalQuery;
use kernel::interface::update::DependOnFiliaalModifier;
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::filiaal::*;

mod filiaal;

static POSTGRES_URL: &str = "POSTGRES_URL";

pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        Self::connect(&url).await
    }

    pub async fn connect(url: &str) -> error_stack::Result<Self, KernelError> {
        let pool = Pool::connect(url)
            .await
            .convert_error()
            .attach_printable("Failed to connect to postgres")?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .convert_error()?;
        tracing::info!("Connected to postgres");
        Ok(Self { pool })
    }
}

pub struct PostgresConnection(sqlx::Transaction<'static, Postgres>);

impl Deref for PostgresConnection {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[async_trait::async_trait]
impl Transaction for PostgresConnection {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for PostgresDatabase {
    type Transaction = PostgresConnection;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let con = self.pool.begin().await.convert_error()?;
        Ok(PostgresConnection(con))
    }
}

impl DependOnFiliaalQuery for PostgresDatabase {
    type FiliaalQuery = PostgresFiliaalRepository;
    fn filiaal_query(&self) -> &Self::FiliaalQuery {
        &PostgresFiliaalRepository
    }
}

impl DependOnFiliaalModifier for PostgresDatabase {
    type FiliaalModifier = PostgresFiliaalRepository;
    fn filiaal_modifier(&self) -> &Self::FiliaalModifier {
        &PostgresFiliaalRepository
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match error {
            Error::PoolTimedOut => Report::from(error).change_context(KernelError::Timeout),
            _ => Report::from(error).change_context(KernelError::Internal),
        })
    }
}

impl<T> ConvertError for Result<T, MigrateError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| "Failed to migrate postgres schema")
    }
}
