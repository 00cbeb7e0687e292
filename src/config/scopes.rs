use crate::config::model::AuthType;

/// One entry of a provider scope catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Required scopes cannot be deselected by the operator
    pub required: bool,
}

const fn entry(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    required: bool,
) -> ScopeEntry {
    ScopeEntry {
        id,
        name,
        description,
        required,
    }
}

const PAOTANG_SCOPES: &[ScopeEntry] = &[
    entry("anonymous", "Anonymous", "Access to user anonymous information", false),
    entry("paotangid.citizen", "Citizen", "Access to user citizen information", true),
    entry("paotangid.title", "Title", "Access to user title information", false),
    entry("paotangid.fullname_th", "Fullname Th", "Access to user fullname_th information", false),
    entry("paotangid.fullname_en", "Fullname En", "Access to user fullname_en information", false),
    entry("paotangid.gender", "Gender", "Access to user gender information", false),
    entry("paotangid.birthdate", "Birthdate", "Access to user birthdate information", false),
    entry(
        "paotangid.citizen_card_details",
        "Citizen Card Details",
        "Access to user citizen_card_details information",
        false,
    ),
    entry("paotangid.mobile", "Mobile", "Access to user mobile information", false),
    entry("paotangid.email", "Email", "Access to user email information", false),
    entry("paotangid.legal_address", "Legal Address", "Access to user legal_address information", false),
    entry(
        "paotangid.mailing_address",
        "Mailing Address",
        "Access to user mailing_address information",
        false,
    ),
    entry(
        "paotangid.office_address",
        "Office Address",
        "Access to user office_address information",
        false,
    ),
    entry("paotangid.work_profile", "Work Profile", "Access to user work_profile information", false),
    entry("paotangid.selfie_image", "Selfie Image", "Access to user selfie_image information", false),
];

const NEXTPASS_SCOPES: &[ScopeEntry] = &[
    entry("anonymous", "Next Anonymous", "Access to user anonymous information", true),
    entry("paotangid.citizen", "Citizen", "Access to user citizen information", false),
    entry("paotangid.title", "Title", "Access to user title information", false),
    entry("paotangid.fullname_th", "Fullname Th", "Access to user fullname_th information", false),
    entry("paotangid.fullname_en", "Fullname En", "Access to user fullname_en information", false),
    entry("paotangid.gender", "Gender", "Access to user gender information", false),
    entry("paotangid.birthdate", "Birthdate", "Access to user birthdate information", false),
    entry(
        "paotangid.citizen_card_details",
        "Citizen Card Details",
        "Access to user citizen_card_details information",
        false,
    ),
    entry("paotangid.mobile", "Mobile", "Access to user mobile information", false),
    entry("paotangid.email", "Email", "Access to user email information", false),
    entry("paotangid.legal_address", "Legal Address", "Access to user legal_address information", false),
    entry(
        "paotangid.mailing_address",
        "Mailing Address",
        "Access to user mailing_address information",
        false,
    ),
    entry(
        "paotangid.office_address",
        "Office Address",
        "Access to user office_address information",
        false,
    ),
    entry("paotangid.work_profile", "Work Profile", "Access to user work_profile information", false),
    entry("paotangid.selfie_image", "Selfie Image", "Access to user selfie_image information", false),
];

/// Fixed, provider-specific list of permission identifiers offered to the
/// operator. The toggle helper lives here rather than on the store: the
/// store replaces scope lists verbatim, the catalog is what knows which
/// entries may not be deselected.
#[derive(Debug, Clone, Copy)]
pub struct ScopeCatalog {
    entries: &'static [ScopeEntry],
}

impl ScopeCatalog {
    pub fn for_provider(auth_type: AuthType) -> ScopeCatalog {
        match auth_type {
            AuthType::Paotang => ScopeCatalog {
                entries: PAOTANG_SCOPES,
            },
            AuthType::Nextpass => ScopeCatalog {
                entries: NEXTPASS_SCOPES,
            },
        }
    }

    pub fn entries(&self) -> &'static [ScopeEntry] {
        self.entries
    }

    pub fn is_required(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id && e.required)
    }

    /// Identifiers of the required tier, in catalog order
    pub fn required_ids(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.required)
            .map(|e| e.id.to_string())
            .collect()
    }

    /// Toggle a scope in a selection, preserving insertion order.
    /// Toggling a required scope is a no-op.
    pub fn toggle(&self, current: &[String], id: &str) -> Vec<String> {
        if self.is_required(id) {
            return current.to_vec();
        }
        if current.iter().any(|s| s == id) {
            current.iter().filter(|s| *s != id).cloned().collect()
        } else {
            let mut next = current.to_vec();
            next.push(id.to_string());
            next
        }
    }
}
