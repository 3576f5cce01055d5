use crate::domain::model::Place;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the dataset document comes from.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>>;
    fn location(&self) -> &str;
}

#[async_trait]
impl<T: DataSource + ?Sized> DataSource for Box<T> {
    async fn fetch(&self) -> Result<Vec<u8>> {
        (**self).fetch().await
    }

    fn location(&self) -> &str {
        (**self).location()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn source(&self) -> &str;
    fn no_results_message(&self) -> &str;
    fn empty_query_alert(&self) -> &str;
    fn container_id(&self) -> &str;
}

/// The results area of the page.
pub trait Container {
    fn clear(&mut self);
    fn push_placeholder(&mut self, message: &str);
    fn push_card(&mut self, place: &Place);
    fn set_visible(&mut self, visible: bool);
}

pub trait InputField {
    fn value(&self) -> String;
    fn set_value(&mut self, value: &str);
    fn clear(&mut self);
}

/// Blocking, user-facing notice.
pub trait Alerter {
    fn alert(&mut self, message: &str);
}
