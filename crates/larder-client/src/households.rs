//! Health-check and household endpoints.

use larder_core::Household;
use tracing::debug;

use crate::{ApiResult, LarderClient, http::check_response};

impl LarderClient {
    /// Probe connectivity and credentials against `/api/health`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError`] if the server is unreachable, the
    /// credential is rejected, or the server reports unhealthy.
    pub async fn test_connection(&self) -> ApiResult<()> {
        check_response(self.get("/api/health").send().await?).await?;
        debug!("connection test succeeded");
        Ok(())
    }

    /// All households the credential has access to.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClientError`] if the request fails or the response
    /// cannot be parsed.
    pub async fn list_households(&self) -> ApiResult<Vec<Household>> {
        let resp = check_response(self.get("/api/household").send().await?).await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use larder_core::Household;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"[
        {"id": 1, "name": "Home", "language": "en", "member": []},
        {"id": 4, "name": "Cabin"}
    ]"#;

    #[test]
    fn parse_household_response() {
        let households: Vec<Household> = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(households.len(), 2);
        assert_eq!(households[0].id, 1);
        assert_eq!(households[0].name, "Home");
        assert_eq!(households[1].name, "Cabin");
    }
}
