//! Unique identifiers of the transfer syntaxes and SOP classes
//! known to this toolkit.

// Transfer syntaxes

/// Implicit VR Little Endian, the default transfer syntax.
pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
/// Explicit VR Little Endian.
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
/// Explicit VR Big Endian.
pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";

// DICOS storage SOP classes

/// DICOS CT Image Storage.
pub const DICOS_CT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.501.1";
/// DICOS Digital X-Ray Image Storage, for presentation.
pub const DICOS_DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION: &str =
    "1.2.840.10008.5.1.4.1.1.501.2.1";
/// DICOS Digital X-Ray Image Storage, for processing.
pub const DICOS_DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PROCESSING: &str =
    "1.2.840.10008.5.1.4.1.1.501.2.2";
/// DICOS Threat Detection Report Storage.
pub const DICOS_THREAT_DETECTION_REPORT_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.501.3";
/// DICOS 2D Advanced Imaging Technology (AIT) Storage.
pub const DICOS_2D_AIT_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.501.4";
/// DICOS 3D Advanced Imaging Technology (AIT) Storage.
pub const DICOS_3D_AIT_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.501.5";
/// DICOS Quadrupole Resonance (QR) Storage.
pub const DICOS_QUADRUPOLE_RESONANCE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.501.6";
