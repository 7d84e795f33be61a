//! Client method generators shared by the entity clients.
//!
//! Every client wraps a `ResourceClient<$entity>` in a field named `inner` and keeps
//! the default page size for its list screen in `default_page_size`.

macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(
                inner: $crate::actor_framework::ResourceClient<$entity>,
                default_page_size: usize,
            ) -> Self {
                Self { inner, default_page_size }
            }
        }
    };
}

macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident, $entity_name_plural:ident) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $entity_name_snake>](
                    &self,
                    id: $crate::actor_framework::RecordId,
                ) -> Result<Option<$entity>, $error> {
                    tracing::debug!("Sending request");
                    self.inner.get(id).await.map_err(<$error>::from)
                }

                /// Filter, order and page the current records.
                #[tracing::instrument(skip(self, params), fields(keyword = %params.keyword, status = %params.status, page = params.page))]
                pub async fn [<list_ $entity_name_plural>](
                    &self,
                    params: &$crate::query::SearchParams,
                ) -> Result<$crate::pagination::Page<$entity>, $error> {
                    tracing::debug!("Sending request");
                    let records = self.inner.list().await.map_err(<$error>::from)?;
                    let page = $crate::query::search(records, params, self.default_page_size);
                    tracing::debug!(total = page.page_info.total, returned = page.items.len(), "Listed");
                    Ok(page)
                }

                /// Every record, unordered. Used for aggregate views.
                #[tracing::instrument(skip(self))]
                pub async fn snapshot(&self) -> Result<Vec<$entity>, $error> {
                    self.inner.list().await.map_err(<$error>::from)
                }
            }
        }
    };
}

macro_rules! impl_client_delete {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident) => {
        paste::paste! {
            impl $client_name {
                /// Removes the record for good. Its id is never handed out again.
                #[tracing::instrument(skip(self))]
                pub async fn [<delete_ $entity_name_snake>](
                    &self,
                    id: $crate::actor_framework::RecordId,
                ) -> Result<(), $error> {
                    tracing::debug!("Sending request");
                    self.inner.delete(id).await.map_err(<$error>::from)?;
                    tracing::info!(id, "Deleted");
                    Ok(())
                }
            }
        }
    };
}

macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident, $entity_name_plural:ident) => {
        impl_client_new!($client_name, $entity);
        impl_client_methods!($client_name, $entity, $error, $entity_name_snake, $entity_name_plural);
        impl_client_delete!($client_name, $entity, $error, $entity_name_snake);
    };
}
