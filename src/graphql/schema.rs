use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::store::Catalog;

use super::types::*;

pub type FolioSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(catalog: Arc<Catalog>) -> FolioSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(catalog)
        .finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List of all books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let store = catalog(ctx)?;
        Ok(store.books().into_iter().map(Into::into).collect())
    }

    /// A single book by id
    async fn book(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<Option<Book>> {
        let store = catalog(ctx)?;
        Ok(store.book_by_id(id).map(Into::into))
    }

    /// List of all authors
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        let store = catalog(ctx)?;
        Ok(store.authors().into_iter().map(Into::into).collect())
    }

    /// A single author by id
    async fn author(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<Option<Author>> {
        let store = catalog(ctx)?;
        Ok(store.author_by_id(id).map(Into::into))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a book
    ///
    /// The author id is not checked against the author list; a book may
    /// reference an author that does not exist.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: i32,
    ) -> async_graphql::Result<Book> {
        let store = catalog(ctx)?;
        Ok(store.append_book(name, author_id).into())
    }

    /// Add an author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> async_graphql::Result<Author> {
        let store = catalog(ctx)?;
        Ok(store.append_author(name).into())
    }
}
