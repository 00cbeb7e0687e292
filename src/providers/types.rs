use serde::{Deserialize, Serialize};

/// Authorization request body shared by the app-to-app and QR flows.
///
/// Every field is always present on the wire; unset values serialize as
/// empty strings or an empty list, never as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthRequestBody {
    pub client_id: String,
    pub redirect_uri: String,
    pub response_type: String,
    pub scope: Vec<String>,
    pub acr: String,
    pub prompt: String,
    pub state: String,
}

/// Successful app-to-app initiation yields a deep link into the provider
/// app
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "deeplinkUrl")]
    pub deeplink_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

/// Token endpoint response; transient, never persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// Token exchange request parameters
#[derive(Debug, Serialize)]
pub(crate) struct TokenExchangeRequest {
    pub grant_type: String,
    pub code: String,
    pub redirect_uri: String,
    pub client_id: String,
    pub client_secret: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub scope: String,
}

/// Provider-shaped profile record returned by `fetch_profile`
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ProfileRecord {
    Paotang(PaotangProfile),
    Nextpass(NextpassProfile),
}

// Paotang wraps the profile payload in a code/message envelope.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaotangProfile {
    pub code: Option<String>,
    pub message: Option<String>,
    pub sub: Option<String>,
    pub data: Option<PaotangProfileData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaotangProfileData {
    pub cid: Option<String>,
    pub birth_date: Option<String>,
    pub gender: Option<String>,
    pub title: Option<String>,
    pub mobile_no: Option<String>,
    pub email: Option<String>,
    pub full_name_th: Option<FullNameTh>,
    pub full_name_en: Option<FullNameEn>,
    pub id_card_details: Option<IdCardDetails>,
    pub legal_address: Option<Address>,
    pub mailing_address: Option<Address>,
    pub office_address: Option<OfficeAddress>,
    pub work_profile: Option<WorkProfile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullNameTh {
    pub thai_first_name: Option<String>,
    pub thai_middle_name: Option<String>,
    pub thai_last_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullNameEn {
    pub eng_first_name: Option<String>,
    pub eng_middle_name: Option<String>,
    pub eng_last_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdCardDetails {
    pub date_of_issue: Option<String>,
    pub date_of_expiry: Option<String>,
    pub place_of_issue: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address: Option<String>,
    pub sub_district: Option<String>,
    pub district: Option<String>,
    pub state_prov: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone_no: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeAddress {
    pub office_name: Option<String>,
    #[serde(flatten)]
    pub address: Address,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkProfile {
    pub occupation_code: Option<String>,
    pub occupation_value: Option<String>,
    pub occupation_group: Option<String>,
    pub occupation_group_value: Option<String>,
    pub sub_occupation_group_value: Option<String>,
    pub salary_value: Option<String>,
}

/// NextPass returns the person record flat, without an envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextpassProfile {
    pub full_name_th: Option<String>,
    pub thai_first_name: Option<String>,
    pub thai_middle_name: Option<String>,
    pub thai_last_name: Option<String>,
    pub full_name_en: Option<String>,
    pub eng_first_name: Option<String>,
    pub eng_middle_name: Option<String>,
    pub eng_last_name: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<String>,
    pub mobile_no: Option<String>,
    pub email: Option<String>,
    pub work_profile: Option<WorkProfile>,
    pub legal_address: Option<Address>,
    pub mailing_address: Option<Address>,
    pub office_address: Option<OfficeAddress>,
    pub id_card_details: Option<IdCardDetails>,
}
