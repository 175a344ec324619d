//! Wire types for the campaign backend API.

use serde::Deserialize;

/// Placeholder label for agents with neither a name nor a usable id.
const UNNAMED_AGENT: &str = "unnamed agent";

/// A backend-configured voice-calling persona.
///
/// Agents are read-only projections of backend configuration: fetched fresh
/// on each view activation, never mutated locally.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Agent {
    /// Opaque, stable, unique identifier.
    pub id: String,
    /// Optional human-readable name.
    #[serde(default)]
    pub name: Option<String>,
}

impl Agent {
    /// Label shown in lists and selectors.
    ///
    /// Falls back to the id when the name is absent or blank, and to a fixed
    /// placeholder when the id is empty too.
    #[must_use]
    pub fn display_label(&self) -> &str {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ if !self.id.is_empty() => &self.id,
            _ => UNNAMED_AGENT,
        }
    }
}

/// Response to a successful lead upload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadReceipt {
    /// Identifiers of the leads created from the CSV.
    pub lead_ids: Vec<String>,
}

/// Lead counts per call status, as reported by the stats endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct LeadStats {
    /// Total number of leads known to the backend.
    #[serde(default)]
    pub total_leads: u64,
    /// Leads never called yet.
    #[serde(default)]
    pub new_calls: u64,
    /// Leads queued for a retry.
    #[serde(default)]
    pub retry_calls: u64,
    /// Leads with a scheduled callback.
    #[serde(default)]
    pub callback_calls: u64,
    /// Leads whose call completed.
    #[serde(default)]
    pub completed_calls: u64,
    /// Leads whose call failed permanently.
    #[serde(default)]
    pub failed_calls: u64,
}

/// Current calling concurrency as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct ConcurrencyInfo {
    /// Calls currently in progress.
    #[serde(default)]
    pub current_concurrency: u64,
    /// Maximum concurrent calls allowed.
    #[serde(default)]
    pub concurrency_limit: u64,
}

/// Backend health probe response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Health {
    /// Health status string (the backend reports `"healthy"`).
    pub status: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_label_prefers_name() {
        let agent = Agent {
            id: "agent_42".to_string(),
            name: Some("Sales Qualifier".to_string()),
        };
        assert_eq!(agent.display_label(), "Sales Qualifier");
    }

    #[test]
    fn display_label_falls_back_to_id() {
        let agent = Agent {
            id: "agent_42".to_string(),
            name: None,
        };
        assert_eq!(agent.display_label(), "agent_42");

        let blank = Agent {
            id: "agent_42".to_string(),
            name: Some("   ".to_string()),
        };
        assert_eq!(blank.display_label(), "agent_42");
    }

    #[test]
    fn display_label_placeholder_when_everything_missing() {
        let agent = Agent {
            id: String::new(),
            name: None,
        };
        assert_eq!(agent.display_label(), "unnamed agent");
    }

    #[test]
    fn agent_decodes_with_and_without_name() -> Result<(), serde_json::Error> {
        let agents: Vec<Agent> =
            serde_json::from_str(r#"[{"id":"a1","name":"Alpha"},{"id":"a2"},{"id":"a3","name":null}]"#)?;
        assert_eq!(agents.len(), 3);
        assert_eq!(agents[0].name.as_deref(), Some("Alpha"));
        assert_eq!(agents[1].name, None);
        assert_eq!(agents[2].name, None);
        Ok(())
    }

    #[test]
    fn upload_receipt_requires_lead_ids() {
        let ok: Result<UploadReceipt, _> =
            serde_json::from_str(r#"{"status":"success","message":"ok","lead_ids":["1","2"]}"#);
        assert_eq!(
            ok.map(|r| r.lead_ids.len()).ok(),
            Some(2),
            "extra fields are tolerated, lead_ids is decoded"
        );

        let missing: Result<UploadReceipt, _> = serde_json::from_str(r#"{"status":"success"}"#);
        assert!(missing.is_err(), "a receipt without lead_ids is malformed");
    }

    #[test]
    fn lead_stats_fields_default_to_zero() -> Result<(), serde_json::Error> {
        let stats: LeadStats = serde_json::from_str(r#"{"total_leads":7}"#)?;
        assert_eq!(stats.total_leads, 7);
        assert_eq!(stats.failed_calls, 0);
        Ok(())
    }
}
