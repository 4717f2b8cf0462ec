use tracing::instrument;

use customerio_client::{RequestMethod, Result};

use crate::types::RegionInfo;

impl super::TrackClient {
    /// Look up the data center that hosts this workspace.
    ///
    /// Useful before switching a client to [`Region::Eu`](crate::Region::Eu).
    #[instrument(skip(self))]
    pub fn region(&self) -> Result<RegionInfo> {
        self.client
            .execute_and_verify(RequestMethod::Get, "/api/v1/accounts/region", None)?
            .json()
    }
}
