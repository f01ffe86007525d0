use std::ops::Deref;
use std::sync::Arc;

use application::service::{
    CreateFiliaalService, DeleteFiliaalService, GetFiliaalService, UpdateFiliaalService,
};

use crate::config::ServerConfig;
use crate::link::FiliaalLinks;

pub trait FiliaalDatabase:
    GetFiliaalService + CreateFiliaalService + UpdateFiliaalService + DeleteFiliaalService
{
}

impl<T> FiliaalDatabase for T where
    T: GetFiliaalService + CreateFiliaalService + UpdateFiliaalService + DeleteFiliaalService
{
}

pub struct AppModule<D>(Arc<Handler<D>>);

impl<D> AppModule<D> {
    pub fn new(database: D, config: &ServerConfig) -> Self {
        Self(Arc::new(Handler::init(database, config)))
    }
}

impl<D> Clone for AppModule<D> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<D> Deref for AppModule<D> {
    type Target = Handler<D>;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler<D> {
    database: D,
    links: FiliaalLinks,
}

impl<D> Handler<D> {
    pub fn init(database: D, config: &ServerConfig) -> Self {
        Self {
            database,
            links: FiliaalLinks::new(config.base_url.as_str()),
        }
    }

    pub fn database(&self) -> &D {
        &self.database
    }

    pub fn links(&self) -> &FiliaalLinks {
        &self.links
    }
}
