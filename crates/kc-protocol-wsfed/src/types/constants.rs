//! WS-Trust namespaces and element names.

/// WS-Trust 1.3 namespace URI.
pub const WST_NS: &str = "http://docs.oasis-open.org/ws-sx/ws-trust/200512";

/// WS-Policy namespace URI (`AppliesTo`).
pub const WSP_NS: &str = "http://schemas.xmlsoap.org/ws/2004/09/policy";

/// WS-Addressing namespace URI (`EndpointReference`).
pub const WSA_NS: &str = "http://www.w3.org/2005/08/addressing";

/// WS-Security secext namespace URI.
pub const WSSE_NS: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-secext-1.0.xsd";

/// WS-Security utility namespace URI.
pub const WSU_NS: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-utility-1.0.xsd";

/// Namespace bound to `xmlns` declarations.
pub const XMLNS_NS: &str = "http://www.w3.org/2000/xmlns/";

/// WS-Trust element and attribute local names.
pub mod wst {
    /// `RequestSecurityTokenCollection`.
    pub const RST_COLLECTION: &str = "RequestSecurityTokenCollection";
    /// `RequestSecurityToken`.
    pub const RST: &str = "RequestSecurityToken";
    /// `RequestSecurityTokenResponseCollection`.
    pub const RSTR_COLLECTION: &str = "RequestSecurityTokenResponseCollection";
    /// `RequestSecurityTokenResponse`.
    pub const RSTR: &str = "RequestSecurityTokenResponse";
    /// `Context` attribute.
    pub const CONTEXT: &str = "Context";

    /// `RequestType`.
    pub const REQUEST_TYPE: &str = "RequestType";
    /// `TokenType`.
    pub const TOKEN_TYPE: &str = "TokenType";
    /// `KeyType`.
    pub const KEY_TYPE: &str = "KeyType";
    /// `Lifetime`.
    pub const LIFETIME: &str = "Lifetime";
    /// `Created` (wsu).
    pub const CREATED: &str = "Created";
    /// `Expires` (wsu).
    pub const EXPIRES: &str = "Expires";
    /// `OnBehalfOf`.
    pub const ON_BEHALF_OF: &str = "OnBehalfOf";
    /// `KeySize`.
    pub const KEY_SIZE: &str = "KeySize";
    /// `Entropy`.
    pub const ENTROPY: &str = "Entropy";
    /// `BinarySecret`.
    pub const BINARY_SECRET: &str = "BinarySecret";
    /// `Type` attribute.
    pub const TYPE: &str = "Type";
    /// `UseKey`.
    pub const USE_KEY: &str = "UseKey";
    /// `X509Certificate` (xmldsig).
    pub const X509_CERTIFICATE: &str = "X509Certificate";
    /// `KeyValue` (xmldsig).
    pub const KEY_VALUE: &str = "KeyValue";
    /// `RequestedTokenCancelled`.
    pub const REQUESTED_TOKEN_CANCELLED: &str = "RequestedTokenCancelled";
    /// `RequestedProofToken`.
    pub const REQUESTED_PROOF_TOKEN: &str = "RequestedProofToken";
    /// `ComputedKey`.
    pub const COMPUTED_KEY: &str = "ComputedKey";
    /// `RequestedSecurityToken`.
    pub const REQUESTED_TOKEN: &str = "RequestedSecurityToken";
    /// `RequestedAttachedReference`.
    pub const REQUESTED_ATTACHED_REFERENCE: &str = "RequestedAttachedReference";
    /// `RequestedUnattachedReference`.
    pub const REQUESTED_UNATTACHED_REFERENCE: &str = "RequestedUnattachedReference";
    /// `Status`.
    pub const STATUS: &str = "Status";
    /// `Code`.
    pub const CODE: &str = "Code";
    /// `Reason`.
    pub const REASON: &str = "Reason";
    /// `Renewing`.
    pub const RENEWING: &str = "Renewing";
    /// `Allow` attribute.
    pub const ALLOW: &str = "Allow";
    /// `OK` attribute.
    pub const OK: &str = "OK";

    /// `ComputedKeyAlgorithm`.
    pub const COMPUTED_KEY_ALGORITHM: &str = "ComputedKeyAlgorithm";
    /// `SignatureAlgorithm`.
    pub const SIGNATURE_ALGORITHM: &str = "SignatureAlgorithm";
    /// `EncryptionAlgorithm`.
    pub const ENCRYPTION_ALGORITHM: &str = "EncryptionAlgorithm";
    /// `CanonicalizationAlgorithm`.
    pub const CANONICALIZATION_ALGORITHM: &str = "CanonicalizationAlgorithm";
    /// `ValidateTarget`.
    pub const VALIDATE_TARGET: &str = "ValidateTarget";
    /// `RenewTarget`.
    pub const RENEW_TARGET: &str = "RenewTarget";
    /// `CancelTarget`.
    pub const CANCEL_TARGET: &str = "CancelTarget";
}

/// WS-Security element and attribute local names.
pub mod wsse {
    /// `SecurityTokenReference`.
    pub const SECURITY_TOKEN_REFERENCE: &str = "SecurityTokenReference";
    /// `UsernameToken`.
    pub const USERNAME_TOKEN: &str = "UsernameToken";
    /// `Username`.
    pub const USERNAME: &str = "Username";
    /// `Id` attribute (wsu).
    pub const ID: &str = "Id";
    /// `Usage` attribute.
    pub const USAGE: &str = "Usage";
}

/// WS-Policy / WS-Addressing local names.
pub mod wsp {
    /// `AppliesTo`.
    pub const APPLIES_TO: &str = "AppliesTo";
    /// `EndpointReference` (wsa).
    pub const ENDPOINT_REFERENCE: &str = "EndpointReference";
    /// `Address` (wsa).
    pub const ADDRESS: &str = "Address";
}

/// WS-Trust request type URIs.
pub mod request_types {
    /// Issue a new token.
    pub const ISSUE: &str = "http://docs.oasis-open.org/ws-sx/ws-trust/200512/Issue";
    /// Renew an issued token.
    pub const RENEW: &str = "http://docs.oasis-open.org/ws-sx/ws-trust/200512/Renew";
    /// Cancel an issued token.
    pub const CANCEL: &str = "http://docs.oasis-open.org/ws-sx/ws-trust/200512/Cancel";
    /// Validate a token.
    pub const VALIDATE: &str = "http://docs.oasis-open.org/ws-sx/ws-trust/200512/Validate";
}
