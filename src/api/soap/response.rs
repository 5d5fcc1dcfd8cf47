use serde::{Deserialize, Serialize};

const INCORRECT_API_PASSWORD_FAULT: &str = "IncorrectApiPasswordFault";
const PACKET_IDS_FAULT: &str = "PacketIdsFault";
const PACKET_ID_FAULT: &str = "PacketIdFault";
const INVALID_COURIER_NUMBER_FAULT: &str = "InvalidCourierNumber";

/// Faults the plugin reacts to differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    WrongPassword,
    PacketIds,
    PacketId,
    InvalidCourierNumber,
    Other,
}

impl FaultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FaultKind::WrongPassword => "wrong_password",
            FaultKind::PacketIds => "packet_ids",
            FaultKind::PacketId => "packet_id",
            FaultKind::InvalidCourierNumber => "invalid_courier_number",
            FaultKind::Other => "other",
        }
    }
}

/// Fault part shared by every SOAP response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseResponse {
    fault: Option<String>,
    fault_string: Option<String>,
}

impl BaseResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fault(fault: impl Into<String>, fault_string: impl Into<String>) -> Self {
        Self {
            fault: Some(fault.into()),
            fault_string: Some(fault_string.into()),
        }
    }

    pub fn has_fault(&self) -> bool {
        self.fault.as_deref().is_some_and(|fault| !fault.is_empty())
    }

    pub fn has_wrong_password(&self) -> bool {
        self.fault.as_deref() == Some(INCORRECT_API_PASSWORD_FAULT)
    }

    pub fn has_packet_ids_fault(&self) -> bool {
        self.fault.as_deref() == Some(PACKET_IDS_FAULT)
    }

    pub fn has_packet_id_fault(&self) -> bool {
        self.fault.as_deref() == Some(PACKET_ID_FAULT)
    }

    pub fn has_invalid_courier_number_fault(&self) -> bool {
        self.fault.as_deref() == Some(INVALID_COURIER_NUMBER_FAULT)
    }

    pub fn fault_kind(&self) -> Option<FaultKind> {
        if !self.has_fault() {
            return None;
        }
        let kind = if self.has_wrong_password() {
            FaultKind::WrongPassword
        } else if self.has_packet_ids_fault() {
            FaultKind::PacketIds
        } else if self.has_packet_id_fault() {
            FaultKind::PacketId
        } else if self.has_invalid_courier_number_fault() {
            FaultKind::InvalidCourierNumber
        } else {
            FaultKind::Other
        };
        Some(kind)
    }

    pub fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }

    pub fn fault_string(&self) -> Option<&str> {
        self.fault_string.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fault_by_default() {
        let response = BaseResponse::new();

        assert!(!response.has_fault());
        assert!(!response.has_wrong_password());
        assert_eq!(response.fault_string(), None);
        assert_eq!(response.fault_kind(), None);
    }

    #[test]
    fn test_empty_fault_is_not_a_fault() {
        let response = BaseResponse::with_fault("", "");
        assert!(!response.has_fault());
        assert_eq!(response.fault_kind(), None);
    }

    #[test]
    fn test_fault_classification() {
        let response = BaseResponse::with_fault("IncorrectApiPasswordFault", "Incorrect password.");
        assert!(response.has_fault());
        assert!(response.has_wrong_password());
        assert!(!response.has_packet_id_fault());

        let response = BaseResponse::with_fault("PacketIdsFault", "Unknown packets.");
        assert!(response.has_packet_ids_fault());
        assert!(!response.has_packet_id_fault());

        let response = BaseResponse::with_fault("PacketIdFault", "Unknown packet.");
        assert!(response.has_packet_id_fault());

        let response = BaseResponse::with_fault("InvalidCourierNumber", "Bad number.");
        assert!(response.has_invalid_courier_number_fault());
        assert_eq!(response.fault_string(), Some("Bad number."));
    }

    #[test]
    fn test_fault_kind() {
        let cases = [
            ("IncorrectApiPasswordFault", FaultKind::WrongPassword),
            ("PacketIdsFault", FaultKind::PacketIds),
            ("PacketIdFault", FaultKind::PacketId),
            ("InvalidCourierNumber", FaultKind::InvalidCourierNumber),
            ("HttpError", FaultKind::Other),
        ];

        for (fault, kind) in cases {
            let response = BaseResponse::with_fault(fault, "message");
            assert_eq!(response.fault_kind(), Some(kind));
        }
    }
}
