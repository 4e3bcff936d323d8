//! Dashboard sub-client: one-shot aggregate snapshot.

use super::DashboardSnapshot;
use crate::client::DashboardClient;
use crate::error::SdkError;

pub struct Dashboard<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Dashboard<'a> {
    pub async fn get(&self) -> Result<DashboardSnapshot, SdkError> {
        Ok(self.client.http.get_dashboard().await?.into())
    }
}
