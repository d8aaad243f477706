//! Tag constants and dictionary entries of the standard DICOS dictionary.
//!
//! Covers the file meta information group, the general attributes
//! shared by all DICOS objects, and the DICOS specific group `4010`.

use dicos_core::dictionary::{DictionaryEntryRef, TagRange::*, ValueMultiplicity};
use dicos_core::header::{Tag, VR};

/// FileMetaInformationGroupLength (0002,0000) UL 1
#[rustfmt::skip]
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion (0002,0001) OB 1
#[rustfmt::skip]
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID (0002,0002) UI 1
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID (0002,0003) UI 1
#[rustfmt::skip]
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID (0002,0010) UI 1
#[rustfmt::skip]
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID (0002,0012) UI 1
#[rustfmt::skip]
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName (0002,0013) SH 1
#[rustfmt::skip]
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SourceApplicationEntityTitle (0002,0016) AE 1
#[rustfmt::skip]
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// PrivateInformationCreatorUID (0002,0100) UI 1
#[rustfmt::skip]
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// PrivateInformation (0002,0102) OB 1
#[rustfmt::skip]
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);
/// SpecificCharacterSet (0008,0005) CS 1-n
#[rustfmt::skip]
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// ImageType (0008,0008) CS 2-n
#[rustfmt::skip]
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// InstanceCreationDate (0008,0012) DA 1
#[rustfmt::skip]
pub const INSTANCE_CREATION_DATE: Tag = Tag(0x0008, 0x0012);
/// InstanceCreationTime (0008,0013) TM 1
#[rustfmt::skip]
pub const INSTANCE_CREATION_TIME: Tag = Tag(0x0008, 0x0013);
/// InstanceCreatorUID (0008,0014) UI 1
#[rustfmt::skip]
pub const INSTANCE_CREATOR_UID: Tag = Tag(0x0008, 0x0014);
/// SOPClassUID (0008,0016) UI 1
#[rustfmt::skip]
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOPInstanceUID (0008,0018) UI 1
#[rustfmt::skip]
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// StudyDate (0008,0020) DA 1
#[rustfmt::skip]
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate (0008,0021) DA 1
#[rustfmt::skip]
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// ContentDate (0008,0023) DA 1
#[rustfmt::skip]
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// AcquisitionDateTime (0008,002A) DT 1
#[rustfmt::skip]
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// StudyTime (0008,0030) TM 1
#[rustfmt::skip]
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime (0008,0031) TM 1
#[rustfmt::skip]
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// ContentTime (0008,0033) TM 1
#[rustfmt::skip]
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// Modality (0008,0060) CS 1
#[rustfmt::skip]
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// Manufacturer (0008,0070) LO 1
#[rustfmt::skip]
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// InstitutionName (0008,0080) LO 1
#[rustfmt::skip]
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// CodeValue (0008,0100) SH 1
#[rustfmt::skip]
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// CodingSchemeDesignator (0008,0102) SH 1
#[rustfmt::skip]
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// CodeMeaning (0008,0104) LO 1
#[rustfmt::skip]
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// StationName (0008,1010) SH 1
#[rustfmt::skip]
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// ManufacturerModelName (0008,1090) LO 1
#[rustfmt::skip]
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// ReferencedSeriesSequence (0008,1115) SQ 1
#[rustfmt::skip]
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// ReferencedSOPClassUID (0008,1150) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// ReferencedSOPInstanceUID (0008,1155) UI 1
#[rustfmt::skip]
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// ReferencedSOPSequence (0008,1199) SQ 1
#[rustfmt::skip]
pub const REFERENCED_SOP_SEQUENCE: Tag = Tag(0x0008, 0x1199);
/// PatientName (0010,0010) PN 1
#[rustfmt::skip]
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID (0010,0020) LO 1
#[rustfmt::skip]
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// IssuerOfPatientID (0010,0021) LO 1
#[rustfmt::skip]
pub const ISSUER_OF_PATIENT_ID: Tag = Tag(0x0010, 0x0021);
/// PatientBirthDate (0010,0030) DA 1
#[rustfmt::skip]
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// PatientSex (0010,0040) CS 1
#[rustfmt::skip]
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// SliceThickness (0018,0050) DS 1
#[rustfmt::skip]
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP (0018,0060) DS 1
#[rustfmt::skip]
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// DeviceSerialNumber (0018,1000) LO 1
#[rustfmt::skip]
pub const DEVICE_SERIAL_NUMBER: Tag = Tag(0x0018, 0x1000);
/// SoftwareVersions (0018,1020) LO 1-n
#[rustfmt::skip]
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// ProtocolName (0018,1030) LO 1
#[rustfmt::skip]
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// XRayTubeCurrent (0018,1151) IS 1
#[rustfmt::skip]
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// ContentQualification (0018,9004) CS 1
#[rustfmt::skip]
pub const CONTENT_QUALIFICATION: Tag = Tag(0x0018, 0x9004);
/// StudyInstanceUID (0020,000D) UI 1
#[rustfmt::skip]
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID (0020,000E) UI 1
#[rustfmt::skip]
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// StudyID (0020,0010) SH 1
#[rustfmt::skip]
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// SeriesNumber (0020,0011) IS 1
#[rustfmt::skip]
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// InstanceNumber (0020,0013) IS 1
#[rustfmt::skip]
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// PatientOrientation (0020,0020) CS 2
#[rustfmt::skip]
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// ImagePositionPatient (0020,0032) DS 3
#[rustfmt::skip]
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// ImageOrientationPatient (0020,0037) DS 6
#[rustfmt::skip]
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// FrameOfReferenceUID (0020,0052) UI 1
#[rustfmt::skip]
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// SliceLocation (0020,1041) DS 1
#[rustfmt::skip]
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// SamplesPerPixel (0028,0002) US 1
#[rustfmt::skip]
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// PhotometricInterpretation (0028,0004) CS 1
#[rustfmt::skip]
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// NumberOfFrames (0028,0008) IS 1
#[rustfmt::skip]
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// Rows (0028,0010) US 1
#[rustfmt::skip]
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US 1
#[rustfmt::skip]
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// PixelSpacing (0028,0030) DS 2
#[rustfmt::skip]
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// BitsAllocated (0028,0100) US 1
#[rustfmt::skip]
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored (0028,0101) US 1
#[rustfmt::skip]
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit (0028,0102) US 1
#[rustfmt::skip]
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation (0028,0103) US 1
#[rustfmt::skip]
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// PixelPaddingValue (0028,0120) US 1
#[rustfmt::skip]
pub const PIXEL_PADDING_VALUE: Tag = Tag(0x0028, 0x0120);
/// WindowCenter (0028,1050) DS 1-n
#[rustfmt::skip]
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth (0028,1051) DS 1-n
#[rustfmt::skip]
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept (0028,1052) DS 1
#[rustfmt::skip]
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope (0028,1053) DS 1
#[rustfmt::skip]
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// RescaleType (0028,1054) LO 1
#[rustfmt::skip]
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// LowEnergyDetectors (4010,0001) CS 1
#[rustfmt::skip]
pub const LOW_ENERGY_DETECTORS: Tag = Tag(0x4010, 0x0001);
/// HighEnergyDetectors (4010,0002) CS 1
#[rustfmt::skip]
pub const HIGH_ENERGY_DETECTORS: Tag = Tag(0x4010, 0x0002);
/// DetectorGeometrySequence (4010,0004) SQ 1
#[rustfmt::skip]
pub const DETECTOR_GEOMETRY_SEQUENCE: Tag = Tag(0x4010, 0x0004);
/// ThreatROIVoxelSequence (4010,1001) SQ 1
#[rustfmt::skip]
pub const THREAT_ROI_VOXEL_SEQUENCE: Tag = Tag(0x4010, 0x1001);
/// ThreatROIBase (4010,1004) FL 3
#[rustfmt::skip]
pub const THREAT_ROI_BASE: Tag = Tag(0x4010, 0x1004);
/// ThreatROIExtents (4010,1005) FL 3
#[rustfmt::skip]
pub const THREAT_ROI_EXTENTS: Tag = Tag(0x4010, 0x1005);
/// ThreatROIBitmap (4010,1006) OB 1
#[rustfmt::skip]
pub const THREAT_ROI_BITMAP: Tag = Tag(0x4010, 0x1006);
/// RouteSegmentID (4010,1007) SH 1
#[rustfmt::skip]
pub const ROUTE_SEGMENT_ID: Tag = Tag(0x4010, 0x1007);
/// GantryType (4010,1008) CS 1
#[rustfmt::skip]
pub const GANTRY_TYPE: Tag = Tag(0x4010, 0x1008);
/// OOIOwnerType (4010,1009) CS 1
#[rustfmt::skip]
pub const OOI_OWNER_TYPE: Tag = Tag(0x4010, 0x1009);
/// RouteSegmentSequence (4010,100A) SQ 1
#[rustfmt::skip]
pub const ROUTE_SEGMENT_SEQUENCE: Tag = Tag(0x4010, 0x100A);
/// PotentialThreatObjectID (4010,1010) US 1
#[rustfmt::skip]
pub const POTENTIAL_THREAT_OBJECT_ID: Tag = Tag(0x4010, 0x1010);
/// ThreatSequence (4010,1011) SQ 1
#[rustfmt::skip]
pub const THREAT_SEQUENCE: Tag = Tag(0x4010, 0x1011);
/// ThreatCategory (4010,1012) CS 1
#[rustfmt::skip]
pub const THREAT_CATEGORY: Tag = Tag(0x4010, 0x1012);
/// ThreatCategoryDescription (4010,1013) LT 1
#[rustfmt::skip]
pub const THREAT_CATEGORY_DESCRIPTION: Tag = Tag(0x4010, 0x1013);
/// ATDAbilityAssessment (4010,1014) CS 1
#[rustfmt::skip]
pub const ATD_ABILITY_ASSESSMENT: Tag = Tag(0x4010, 0x1014);
/// ATDAssessmentFlag (4010,1015) CS 1
#[rustfmt::skip]
pub const ATD_ASSESSMENT_FLAG: Tag = Tag(0x4010, 0x1015);
/// ATDAssessmentProbability (4010,1016) FL 1
#[rustfmt::skip]
pub const ATD_ASSESSMENT_PROBABILITY: Tag = Tag(0x4010, 0x1016);
/// Mass (4010,1017) FL 1
#[rustfmt::skip]
pub const MASS: Tag = Tag(0x4010, 0x1017);
/// Density (4010,1018) FL 1
#[rustfmt::skip]
pub const DENSITY: Tag = Tag(0x4010, 0x1018);
/// ZEffective (4010,1019) FL 1
#[rustfmt::skip]
pub const Z_EFFECTIVE: Tag = Tag(0x4010, 0x1019);
/// BoardingPassID (4010,101A) SH 1
#[rustfmt::skip]
pub const BOARDING_PASS_ID: Tag = Tag(0x4010, 0x101A);
/// CenterOfMass (4010,101B) FL 3
#[rustfmt::skip]
pub const CENTER_OF_MASS: Tag = Tag(0x4010, 0x101B);
/// CenterOfPTO (4010,101C) FL 3
#[rustfmt::skip]
pub const CENTER_OF_PTO: Tag = Tag(0x4010, 0x101C);
/// BoundingPolygon (4010,101D) FL 6-n
#[rustfmt::skip]
pub const BOUNDING_POLYGON: Tag = Tag(0x4010, 0x101D);
/// RouteSegmentStartLocationID (4010,101E) SH 1
#[rustfmt::skip]
pub const ROUTE_SEGMENT_START_LOCATION_ID: Tag = Tag(0x4010, 0x101E);
/// RouteSegmentEndLocationID (4010,101F) SH 1
#[rustfmt::skip]
pub const ROUTE_SEGMENT_END_LOCATION_ID: Tag = Tag(0x4010, 0x101F);
/// RouteSegmentLocationIDType (4010,1020) CS 1
#[rustfmt::skip]
pub const ROUTE_SEGMENT_LOCATION_ID_TYPE: Tag = Tag(0x4010, 0x1020);
/// AbortReason (4010,1021) CS 1-n
#[rustfmt::skip]
pub const ABORT_REASON: Tag = Tag(0x4010, 0x1021);
/// VolumeOfPTO (4010,1023) FL 1
#[rustfmt::skip]
pub const VOLUME_OF_PTO: Tag = Tag(0x4010, 0x1023);
/// AbortFlag (4010,1024) CS 1
#[rustfmt::skip]
pub const ABORT_FLAG: Tag = Tag(0x4010, 0x1024);
/// RouteSegmentStartTime (4010,1025) DT 1
#[rustfmt::skip]
pub const ROUTE_SEGMENT_START_TIME: Tag = Tag(0x4010, 0x1025);
/// RouteSegmentEndTime (4010,1026) DT 1
#[rustfmt::skip]
pub const ROUTE_SEGMENT_END_TIME: Tag = Tag(0x4010, 0x1026);
/// TDRType (4010,1027) CS 1
#[rustfmt::skip]
pub const TDR_TYPE: Tag = Tag(0x4010, 0x1027);
/// InternationalRouteSegment (4010,1028) CS 1
#[rustfmt::skip]
pub const INTERNATIONAL_ROUTE_SEGMENT: Tag = Tag(0x4010, 0x1028);
/// ThreatDetectionAlgorithmAndVersion (4010,1029) LO 1-n
#[rustfmt::skip]
pub const THREAT_DETECTION_ALGORITHM_AND_VERSION: Tag = Tag(0x4010, 0x1029);
/// AssignedLocation (4010,102A) SH 1
#[rustfmt::skip]
pub const ASSIGNED_LOCATION: Tag = Tag(0x4010, 0x102A);
/// AlarmDecisionTime (4010,102B) DT 1
#[rustfmt::skip]
pub const ALARM_DECISION_TIME: Tag = Tag(0x4010, 0x102B);
/// AlarmDecision (4010,1031) CS 1
#[rustfmt::skip]
pub const ALARM_DECISION: Tag = Tag(0x4010, 0x1031);
/// NumberOfTotalObjects (4010,1033) US 1
#[rustfmt::skip]
pub const NUMBER_OF_TOTAL_OBJECTS: Tag = Tag(0x4010, 0x1033);
/// NumberOfAlarmObjects (4010,1034) US 1
#[rustfmt::skip]
pub const NUMBER_OF_ALARM_OBJECTS: Tag = Tag(0x4010, 0x1034);
/// PTORepresentationSequence (4010,1037) SQ 1
#[rustfmt::skip]
pub const PTO_REPRESENTATION_SEQUENCE: Tag = Tag(0x4010, 0x1037);
/// ATDAssessmentSequence (4010,1038) SQ 1
#[rustfmt::skip]
pub const ATD_ASSESSMENT_SEQUENCE: Tag = Tag(0x4010, 0x1038);
/// TIPType (4010,1039) CS 1
#[rustfmt::skip]
pub const TIP_TYPE: Tag = Tag(0x4010, 0x1039);
/// DICOSVersion (4010,103A) CS 1
#[rustfmt::skip]
pub const DICOS_VERSION: Tag = Tag(0x4010, 0x103A);
/// OOIOwnerCreationTime (4010,1041) DT 1
#[rustfmt::skip]
pub const OOI_OWNER_CREATION_TIME: Tag = Tag(0x4010, 0x1041);
/// OOIType (4010,1042) CS 1
#[rustfmt::skip]
pub const OOI_TYPE: Tag = Tag(0x4010, 0x1042);
/// OOISize (4010,1043) FL 3
#[rustfmt::skip]
pub const OOI_SIZE: Tag = Tag(0x4010, 0x1043);
/// AcquisitionStatus (4010,1044) CS 1
#[rustfmt::skip]
pub const ACQUISITION_STATUS: Tag = Tag(0x4010, 0x1044);
/// BasisMaterialsCodeSequence (4010,1045) SQ 1
#[rustfmt::skip]
pub const BASIS_MATERIALS_CODE_SEQUENCE: Tag = Tag(0x4010, 0x1045);
/// PhantomType (4010,1046) CS 1
#[rustfmt::skip]
pub const PHANTOM_TYPE: Tag = Tag(0x4010, 0x1046);
/// OOIOwnerSequence (4010,1047) SQ 1
#[rustfmt::skip]
pub const OOI_OWNER_SEQUENCE: Tag = Tag(0x4010, 0x1047);
/// ScanType (4010,1048) CS 1
#[rustfmt::skip]
pub const SCAN_TYPE: Tag = Tag(0x4010, 0x1048);
/// ItineraryID (4010,1051) LO 1
#[rustfmt::skip]
pub const ITINERARY_ID: Tag = Tag(0x4010, 0x1051);
/// ItineraryIDType (4010,1052) SH 1
#[rustfmt::skip]
pub const ITINERARY_ID_TYPE: Tag = Tag(0x4010, 0x1052);
/// ItineraryIDAssigningAuthority (4010,1053) LO 1
#[rustfmt::skip]
pub const ITINERARY_ID_ASSIGNING_AUTHORITY: Tag = Tag(0x4010, 0x1053);
/// RouteID (4010,1054) SH 1
#[rustfmt::skip]
pub const ROUTE_ID: Tag = Tag(0x4010, 0x1054);
/// RouteIDAssigningAuthority (4010,1055) SH 1
#[rustfmt::skip]
pub const ROUTE_ID_ASSIGNING_AUTHORITY: Tag = Tag(0x4010, 0x1055);
/// InboundArrivalType (4010,1056) CS 1
#[rustfmt::skip]
pub const INBOUND_ARRIVAL_TYPE: Tag = Tag(0x4010, 0x1056);
/// CarrierID (4010,1058) SH 1
#[rustfmt::skip]
pub const CARRIER_ID: Tag = Tag(0x4010, 0x1058);
/// CarrierIDAssigningAuthority (4010,1059) CS 1
#[rustfmt::skip]
pub const CARRIER_ID_ASSIGNING_AUTHORITY: Tag = Tag(0x4010, 0x1059);
/// SourceOrientation (4010,1060) FL 3
#[rustfmt::skip]
pub const SOURCE_ORIENTATION: Tag = Tag(0x4010, 0x1060);
/// SourcePosition (4010,1061) FL 3
#[rustfmt::skip]
pub const SOURCE_POSITION: Tag = Tag(0x4010, 0x1061);
/// BeltHeight (4010,1062) FL 1
#[rustfmt::skip]
pub const BELT_HEIGHT: Tag = Tag(0x4010, 0x1062);
/// AlgorithmRoutingCodeSequence (4010,1064) SQ 1
#[rustfmt::skip]
pub const ALGORITHM_ROUTING_CODE_SEQUENCE: Tag = Tag(0x4010, 0x1064);
/// TransportClassification (4010,1067) CS 1
#[rustfmt::skip]
pub const TRANSPORT_CLASSIFICATION: Tag = Tag(0x4010, 0x1067);
/// OOITypeDescriptor (4010,1068) LT 1
#[rustfmt::skip]
pub const OOI_TYPE_DESCRIPTOR: Tag = Tag(0x4010, 0x1068);
/// TotalProcessingTime (4010,1069) FL 1
#[rustfmt::skip]
pub const TOTAL_PROCESSING_TIME: Tag = Tag(0x4010, 0x1069);
/// DetectorCalibrationData (4010,106C) OB 1
#[rustfmt::skip]
pub const DETECTOR_CALIBRATION_DATA: Tag = Tag(0x4010, 0x106C);
/// AdditionalScreeningPerformed (4010,106D) CS 1
#[rustfmt::skip]
pub const ADDITIONAL_SCREENING_PERFORMED: Tag = Tag(0x4010, 0x106D);
/// AdditionalInspectionSelectionCriteria (4010,106E) CS 1
#[rustfmt::skip]
pub const ADDITIONAL_INSPECTION_SELECTION_CRITERIA: Tag = Tag(0x4010, 0x106E);
/// AdditionalInspectionMethodSequence (4010,106F) SQ 1
#[rustfmt::skip]
pub const ADDITIONAL_INSPECTION_METHOD_SEQUENCE: Tag = Tag(0x4010, 0x106F);
/// AITDeviceType (4010,1070) CS 1
#[rustfmt::skip]
pub const AIT_DEVICE_TYPE: Tag = Tag(0x4010, 0x1070);
/// QRMeasurementsSequence (4010,1071) SQ 1
#[rustfmt::skip]
pub const QR_MEASUREMENTS_SEQUENCE: Tag = Tag(0x4010, 0x1071);
/// TargetMaterialSequence (4010,1072) SQ 1
#[rustfmt::skip]
pub const TARGET_MATERIAL_SEQUENCE: Tag = Tag(0x4010, 0x1072);
/// SNRThreshold (4010,1073) FD 1
#[rustfmt::skip]
pub const SNR_THRESHOLD: Tag = Tag(0x4010, 0x1073);
/// ImageScaleRepresentation (4010,1075) DS 1
#[rustfmt::skip]
pub const IMAGE_SCALE_REPRESENTATION: Tag = Tag(0x4010, 0x1075);
/// ReferencedPTOSequence (4010,1076) SQ 1
#[rustfmt::skip]
pub const REFERENCED_PTO_SEQUENCE: Tag = Tag(0x4010, 0x1076);
/// ReferencedTDRInstanceSequence (4010,1077) SQ 1
#[rustfmt::skip]
pub const REFERENCED_TDR_INSTANCE_SEQUENCE: Tag = Tag(0x4010, 0x1077);
/// PTOLocationDescription (4010,1078) ST 1
#[rustfmt::skip]
pub const PTO_LOCATION_DESCRIPTION: Tag = Tag(0x4010, 0x1078);
/// AnomalyLocatorIndicatorSequence (4010,1079) SQ 1
#[rustfmt::skip]
pub const ANOMALY_LOCATOR_INDICATOR_SEQUENCE: Tag = Tag(0x4010, 0x1079);
/// AnomalyLocatorIndicator (4010,107A) FL 3
#[rustfmt::skip]
pub const ANOMALY_LOCATOR_INDICATOR: Tag = Tag(0x4010, 0x107A);
/// PTORegionSequence (4010,107B) SQ 1
#[rustfmt::skip]
pub const PTO_REGION_SEQUENCE: Tag = Tag(0x4010, 0x107B);
/// InspectionSelectionCriteria (4010,107C) CS 1
#[rustfmt::skip]
pub const INSPECTION_SELECTION_CRITERIA: Tag = Tag(0x4010, 0x107C);
/// SecondaryInspectionMethodSequence (4010,107D) SQ 1
#[rustfmt::skip]
pub const SECONDARY_INSPECTION_METHOD_SEQUENCE: Tag = Tag(0x4010, 0x107D);
/// PRCSToRCSOrientation (4010,107E) DS 6
#[rustfmt::skip]
pub const PRCS_TO_RCS_ORIENTATION: Tag = Tag(0x4010, 0x107E);
/// PixelData (7FE0,0010) OW 1
#[rustfmt::skip]
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

#[rustfmt::skip]
pub(crate) const ENTRIES: &[DictionaryEntryRef<'static>] = &[
    DictionaryEntryRef { tag: Single(FILE_META_INFORMATION_GROUP_LENGTH), alias: "FileMetaInformationGroupLength", vr: VR::UL, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(FILE_META_INFORMATION_VERSION), alias: "FileMetaInformationVersion", vr: VR::OB, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(MEDIA_STORAGE_SOP_CLASS_UID), alias: "MediaStorageSOPClassUID", vr: VR::UI, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(MEDIA_STORAGE_SOP_INSTANCE_UID), alias: "MediaStorageSOPInstanceUID", vr: VR::UI, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(TRANSFER_SYNTAX_UID), alias: "TransferSyntaxUID", vr: VR::UI, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(IMPLEMENTATION_CLASS_UID), alias: "ImplementationClassUID", vr: VR::UI, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(IMPLEMENTATION_VERSION_NAME), alias: "ImplementationVersionName", vr: VR::SH, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(SOURCE_APPLICATION_ENTITY_TITLE), alias: "SourceApplicationEntityTitle", vr: VR::AE, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(PRIVATE_INFORMATION_CREATOR_UID), alias: "PrivateInformationCreatorUID", vr: VR::UI, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(PRIVATE_INFORMATION), alias: "PrivateInformation", vr: VR::OB, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(SPECIFIC_CHARACTER_SET), alias: "SpecificCharacterSet", vr: VR::CS, vm: ValueMultiplicity::at_least(1) },
    DictionaryEntryRef { tag: Single(IMAGE_TYPE), alias: "ImageType", vr: VR::CS, vm: ValueMultiplicity::at_least(2) },
    DictionaryEntryRef { tag: Single(INSTANCE_CREATION_DATE), alias: "InstanceCreationDate", vr: VR::DA, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(INSTANCE_CREATION_TIME), alias: "InstanceCreationTime", vr: VR::TM, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(INSTANCE_CREATOR_UID), alias: "InstanceCreatorUID", vr: VR::UI, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(SOP_CLASS_UID), alias: "SOPClassUID", vr: VR::UI, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(SOP_INSTANCE_UID), alias: "SOPInstanceUID", vr: VR::UI, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(STUDY_DATE), alias: "StudyDate", vr: VR::DA, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(SERIES_DATE), alias: "SeriesDate", vr: VR::DA, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(CONTENT_DATE), alias: "ContentDate", vr: VR::DA, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ACQUISITION_DATE_TIME), alias: "AcquisitionDateTime", vr: VR::DT, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(STUDY_TIME), alias: "StudyTime", vr: VR::TM, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(SERIES_TIME), alias: "SeriesTime", vr: VR::TM, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(CONTENT_TIME), alias: "ContentTime", vr: VR::TM, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(MODALITY), alias: "Modality", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(MANUFACTURER), alias: "Manufacturer", vr: VR::LO, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(INSTITUTION_NAME), alias: "InstitutionName", vr: VR::LO, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(CODE_VALUE), alias: "CodeValue", vr: VR::SH, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(CODING_SCHEME_DESIGNATOR), alias: "CodingSchemeDesignator", vr: VR::SH, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(CODE_MEANING), alias: "CodeMeaning", vr: VR::LO, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(STATION_NAME), alias: "StationName", vr: VR::SH, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(MANUFACTURER_MODEL_NAME), alias: "ManufacturerModelName", vr: VR::LO, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(REFERENCED_SERIES_SEQUENCE), alias: "ReferencedSeriesSequence", vr: VR::SQ, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(REFERENCED_SOP_CLASS_UID), alias: "ReferencedSOPClassUID", vr: VR::UI, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(REFERENCED_SOP_INSTANCE_UID), alias: "ReferencedSOPInstanceUID", vr: VR::UI, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(REFERENCED_SOP_SEQUENCE), alias: "ReferencedSOPSequence", vr: VR::SQ, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(PATIENT_NAME), alias: "PatientName", vr: VR::PN, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(PATIENT_ID), alias: "PatientID", vr: VR::LO, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ISSUER_OF_PATIENT_ID), alias: "IssuerOfPatientID", vr: VR::LO, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(PATIENT_BIRTH_DATE), alias: "PatientBirthDate", vr: VR::DA, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(PATIENT_SEX), alias: "PatientSex", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(SLICE_THICKNESS), alias: "SliceThickness", vr: VR::DS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(KVP), alias: "KVP", vr: VR::DS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(DEVICE_SERIAL_NUMBER), alias: "DeviceSerialNumber", vr: VR::LO, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(SOFTWARE_VERSIONS), alias: "SoftwareVersions", vr: VR::LO, vm: ValueMultiplicity::at_least(1) },
    DictionaryEntryRef { tag: Single(PROTOCOL_NAME), alias: "ProtocolName", vr: VR::LO, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(X_RAY_TUBE_CURRENT), alias: "XRayTubeCurrent", vr: VR::IS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(CONTENT_QUALIFICATION), alias: "ContentQualification", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(STUDY_INSTANCE_UID), alias: "StudyInstanceUID", vr: VR::UI, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(SERIES_INSTANCE_UID), alias: "SeriesInstanceUID", vr: VR::UI, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(STUDY_ID), alias: "StudyID", vr: VR::SH, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(SERIES_NUMBER), alias: "SeriesNumber", vr: VR::IS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(INSTANCE_NUMBER), alias: "InstanceNumber", vr: VR::IS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(PATIENT_ORIENTATION), alias: "PatientOrientation", vr: VR::CS, vm: ValueMultiplicity::exactly(2) },
    DictionaryEntryRef { tag: Single(IMAGE_POSITION_PATIENT), alias: "ImagePositionPatient", vr: VR::DS, vm: ValueMultiplicity::exactly(3) },
    DictionaryEntryRef { tag: Single(IMAGE_ORIENTATION_PATIENT), alias: "ImageOrientationPatient", vr: VR::DS, vm: ValueMultiplicity::exactly(6) },
    DictionaryEntryRef { tag: Single(FRAME_OF_REFERENCE_UID), alias: "FrameOfReferenceUID", vr: VR::UI, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(SLICE_LOCATION), alias: "SliceLocation", vr: VR::DS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(SAMPLES_PER_PIXEL), alias: "SamplesPerPixel", vr: VR::US, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(PHOTOMETRIC_INTERPRETATION), alias: "PhotometricInterpretation", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(NUMBER_OF_FRAMES), alias: "NumberOfFrames", vr: VR::IS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ROWS), alias: "Rows", vr: VR::US, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(COLUMNS), alias: "Columns", vr: VR::US, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(PIXEL_SPACING), alias: "PixelSpacing", vr: VR::DS, vm: ValueMultiplicity::exactly(2) },
    DictionaryEntryRef { tag: Single(BITS_ALLOCATED), alias: "BitsAllocated", vr: VR::US, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(BITS_STORED), alias: "BitsStored", vr: VR::US, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(HIGH_BIT), alias: "HighBit", vr: VR::US, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(PIXEL_REPRESENTATION), alias: "PixelRepresentation", vr: VR::US, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(PIXEL_PADDING_VALUE), alias: "PixelPaddingValue", vr: VR::US, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(WINDOW_CENTER), alias: "WindowCenter", vr: VR::DS, vm: ValueMultiplicity::at_least(1) },
    DictionaryEntryRef { tag: Single(WINDOW_WIDTH), alias: "WindowWidth", vr: VR::DS, vm: ValueMultiplicity::at_least(1) },
    DictionaryEntryRef { tag: Single(RESCALE_INTERCEPT), alias: "RescaleIntercept", vr: VR::DS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(RESCALE_SLOPE), alias: "RescaleSlope", vr: VR::DS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(RESCALE_TYPE), alias: "RescaleType", vr: VR::LO, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(LOW_ENERGY_DETECTORS), alias: "LowEnergyDetectors", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(HIGH_ENERGY_DETECTORS), alias: "HighEnergyDetectors", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(DETECTOR_GEOMETRY_SEQUENCE), alias: "DetectorGeometrySequence", vr: VR::SQ, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(THREAT_ROI_VOXEL_SEQUENCE), alias: "ThreatROIVoxelSequence", vr: VR::SQ, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(THREAT_ROI_BASE), alias: "ThreatROIBase", vr: VR::FL, vm: ValueMultiplicity::exactly(3) },
    DictionaryEntryRef { tag: Single(THREAT_ROI_EXTENTS), alias: "ThreatROIExtents", vr: VR::FL, vm: ValueMultiplicity::exactly(3) },
    DictionaryEntryRef { tag: Single(THREAT_ROI_BITMAP), alias: "ThreatROIBitmap", vr: VR::OB, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ROUTE_SEGMENT_ID), alias: "RouteSegmentID", vr: VR::SH, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(GANTRY_TYPE), alias: "GantryType", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(OOI_OWNER_TYPE), alias: "OOIOwnerType", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ROUTE_SEGMENT_SEQUENCE), alias: "RouteSegmentSequence", vr: VR::SQ, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(POTENTIAL_THREAT_OBJECT_ID), alias: "PotentialThreatObjectID", vr: VR::US, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(THREAT_SEQUENCE), alias: "ThreatSequence", vr: VR::SQ, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(THREAT_CATEGORY), alias: "ThreatCategory", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(THREAT_CATEGORY_DESCRIPTION), alias: "ThreatCategoryDescription", vr: VR::LT, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ATD_ABILITY_ASSESSMENT), alias: "ATDAbilityAssessment", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ATD_ASSESSMENT_FLAG), alias: "ATDAssessmentFlag", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ATD_ASSESSMENT_PROBABILITY), alias: "ATDAssessmentProbability", vr: VR::FL, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(MASS), alias: "Mass", vr: VR::FL, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(DENSITY), alias: "Density", vr: VR::FL, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(Z_EFFECTIVE), alias: "ZEffective", vr: VR::FL, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(BOARDING_PASS_ID), alias: "BoardingPassID", vr: VR::SH, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(CENTER_OF_MASS), alias: "CenterOfMass", vr: VR::FL, vm: ValueMultiplicity::exactly(3) },
    DictionaryEntryRef { tag: Single(CENTER_OF_PTO), alias: "CenterOfPTO", vr: VR::FL, vm: ValueMultiplicity::exactly(3) },
    DictionaryEntryRef { tag: Single(BOUNDING_POLYGON), alias: "BoundingPolygon", vr: VR::FL, vm: ValueMultiplicity::at_least(6) },
    DictionaryEntryRef { tag: Single(ROUTE_SEGMENT_START_LOCATION_ID), alias: "RouteSegmentStartLocationID", vr: VR::SH, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ROUTE_SEGMENT_END_LOCATION_ID), alias: "RouteSegmentEndLocationID", vr: VR::SH, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ROUTE_SEGMENT_LOCATION_ID_TYPE), alias: "RouteSegmentLocationIDType", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ABORT_REASON), alias: "AbortReason", vr: VR::CS, vm: ValueMultiplicity::at_least(1) },
    DictionaryEntryRef { tag: Single(VOLUME_OF_PTO), alias: "VolumeOfPTO", vr: VR::FL, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ABORT_FLAG), alias: "AbortFlag", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ROUTE_SEGMENT_START_TIME), alias: "RouteSegmentStartTime", vr: VR::DT, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ROUTE_SEGMENT_END_TIME), alias: "RouteSegmentEndTime", vr: VR::DT, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(TDR_TYPE), alias: "TDRType", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(INTERNATIONAL_ROUTE_SEGMENT), alias: "InternationalRouteSegment", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(THREAT_DETECTION_ALGORITHM_AND_VERSION), alias: "ThreatDetectionAlgorithmAndVersion", vr: VR::LO, vm: ValueMultiplicity::at_least(1) },
    DictionaryEntryRef { tag: Single(ASSIGNED_LOCATION), alias: "AssignedLocation", vr: VR::SH, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ALARM_DECISION_TIME), alias: "AlarmDecisionTime", vr: VR::DT, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ALARM_DECISION), alias: "AlarmDecision", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(NUMBER_OF_TOTAL_OBJECTS), alias: "NumberOfTotalObjects", vr: VR::US, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(NUMBER_OF_ALARM_OBJECTS), alias: "NumberOfAlarmObjects", vr: VR::US, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(PTO_REPRESENTATION_SEQUENCE), alias: "PTORepresentationSequence", vr: VR::SQ, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ATD_ASSESSMENT_SEQUENCE), alias: "ATDAssessmentSequence", vr: VR::SQ, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(TIP_TYPE), alias: "TIPType", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(DICOS_VERSION), alias: "DICOSVersion", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(OOI_OWNER_CREATION_TIME), alias: "OOIOwnerCreationTime", vr: VR::DT, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(OOI_TYPE), alias: "OOIType", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(OOI_SIZE), alias: "OOISize", vr: VR::FL, vm: ValueMultiplicity::exactly(3) },
    DictionaryEntryRef { tag: Single(ACQUISITION_STATUS), alias: "AcquisitionStatus", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(BASIS_MATERIALS_CODE_SEQUENCE), alias: "BasisMaterialsCodeSequence", vr: VR::SQ, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(PHANTOM_TYPE), alias: "PhantomType", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(OOI_OWNER_SEQUENCE), alias: "OOIOwnerSequence", vr: VR::SQ, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(SCAN_TYPE), alias: "ScanType", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ITINERARY_ID), alias: "ItineraryID", vr: VR::LO, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ITINERARY_ID_TYPE), alias: "ItineraryIDType", vr: VR::SH, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ITINERARY_ID_ASSIGNING_AUTHORITY), alias: "ItineraryIDAssigningAuthority", vr: VR::LO, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ROUTE_ID), alias: "RouteID", vr: VR::SH, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ROUTE_ID_ASSIGNING_AUTHORITY), alias: "RouteIDAssigningAuthority", vr: VR::SH, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(INBOUND_ARRIVAL_TYPE), alias: "InboundArrivalType", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(CARRIER_ID), alias: "CarrierID", vr: VR::SH, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(CARRIER_ID_ASSIGNING_AUTHORITY), alias: "CarrierIDAssigningAuthority", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(SOURCE_ORIENTATION), alias: "SourceOrientation", vr: VR::FL, vm: ValueMultiplicity::exactly(3) },
    DictionaryEntryRef { tag: Single(SOURCE_POSITION), alias: "SourcePosition", vr: VR::FL, vm: ValueMultiplicity::exactly(3) },
    DictionaryEntryRef { tag: Single(BELT_HEIGHT), alias: "BeltHeight", vr: VR::FL, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ALGORITHM_ROUTING_CODE_SEQUENCE), alias: "AlgorithmRoutingCodeSequence", vr: VR::SQ, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(TRANSPORT_CLASSIFICATION), alias: "TransportClassification", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(OOI_TYPE_DESCRIPTOR), alias: "OOITypeDescriptor", vr: VR::LT, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(TOTAL_PROCESSING_TIME), alias: "TotalProcessingTime", vr: VR::FL, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(DETECTOR_CALIBRATION_DATA), alias: "DetectorCalibrationData", vr: VR::OB, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ADDITIONAL_SCREENING_PERFORMED), alias: "AdditionalScreeningPerformed", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ADDITIONAL_INSPECTION_SELECTION_CRITERIA), alias: "AdditionalInspectionSelectionCriteria", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ADDITIONAL_INSPECTION_METHOD_SEQUENCE), alias: "AdditionalInspectionMethodSequence", vr: VR::SQ, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(AIT_DEVICE_TYPE), alias: "AITDeviceType", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(QR_MEASUREMENTS_SEQUENCE), alias: "QRMeasurementsSequence", vr: VR::SQ, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(TARGET_MATERIAL_SEQUENCE), alias: "TargetMaterialSequence", vr: VR::SQ, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(SNR_THRESHOLD), alias: "SNRThreshold", vr: VR::FD, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(IMAGE_SCALE_REPRESENTATION), alias: "ImageScaleRepresentation", vr: VR::DS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(REFERENCED_PTO_SEQUENCE), alias: "ReferencedPTOSequence", vr: VR::SQ, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(REFERENCED_TDR_INSTANCE_SEQUENCE), alias: "ReferencedTDRInstanceSequence", vr: VR::SQ, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(PTO_LOCATION_DESCRIPTION), alias: "PTOLocationDescription", vr: VR::ST, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ANOMALY_LOCATOR_INDICATOR_SEQUENCE), alias: "AnomalyLocatorIndicatorSequence", vr: VR::SQ, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(ANOMALY_LOCATOR_INDICATOR), alias: "AnomalyLocatorIndicator", vr: VR::FL, vm: ValueMultiplicity::exactly(3) },
    DictionaryEntryRef { tag: Single(PTO_REGION_SEQUENCE), alias: "PTORegionSequence", vr: VR::SQ, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(INSPECTION_SELECTION_CRITERIA), alias: "InspectionSelectionCriteria", vr: VR::CS, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(SECONDARY_INSPECTION_METHOD_SEQUENCE), alias: "SecondaryInspectionMethodSequence", vr: VR::SQ, vm: ValueMultiplicity::exactly(1) },
    DictionaryEntryRef { tag: Single(PRCS_TO_RCS_ORIENTATION), alias: "PRCSToRCSOrientation", vr: VR::DS, vm: ValueMultiplicity::exactly(6) },
    DictionaryEntryRef { tag: Single(PIXEL_DATA), alias: "PixelData", vr: VR::OW, vm: ValueMultiplicity::exactly(1) },
];
