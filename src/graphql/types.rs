use std::sync::Arc;

use async_graphql::{ComplexObject, Context, SimpleObject};

use crate::model::{Author as ModelAuthor, Book as ModelBook};
use crate::store::Catalog;

/// Shared store handle, injected into the schema at build time.
pub(crate) fn catalog<'c>(ctx: &'c Context<'_>) -> async_graphql::Result<&'c Arc<Catalog>> {
    ctx.data::<Arc<Catalog>>()
}

/// This represents an author
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

#[ComplexObject]
impl Author {
    /// Books written by this author
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let store = catalog(ctx)?;
        Ok(store
            .books_by_author(self.id)
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

impl From<ModelAuthor> for Author {
    fn from(a: ModelAuthor) -> Self {
        Self {
            id: a.id,
            name: a.name,
        }
    }
}

/// This represents a book written by an author
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

#[ComplexObject]
impl Book {
    /// The author this book references; null when the id matches no author
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let store = catalog(ctx)?;
        Ok(store.author_by_id(self.author_id).map(Into::into))
    }
}

impl From<ModelBook> for Book {
    fn from(b: ModelBook) -> Self {
        Self {
            id: b.id,
            name: b.name,
            author_id: b.author_id,
        }
    }
}
