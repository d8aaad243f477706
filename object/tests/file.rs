//! Reading and writing complete DICOS files.

use dicos_core::{dicos_value, Attribute, AttributeManager, ErrorLog, Item, VR};
use dicos_dictionary_std::{tags, uids};
use dicos_encoding::{MemoryStream, SliceStream, TransferSyntax};
use dicos_object::modules::{AbortFlag, AlarmDecision, ThreatDetectionReportModule};
use dicos_object::{
    from_reader, open_file, FileDicosObject, FileMetaTableBuilder, Module, ModuleState,
    ReadOptions, ReadPreamble, WriteError, WriteOptions,
};

fn quiet_log() -> ErrorLog {
    let mut log = ErrorLog::new();
    log.ignore_redirect(true);
    log
}

fn threat_report() -> Item {
    let mut dataset = Item::new();
    dataset
        .put_str(tags::SOP_CLASS_UID, VR::UI, uids::DICOS_THREAT_DETECTION_REPORT_STORAGE)
        .unwrap();
    dataset.put_str(tags::SOP_INSTANCE_UID, VR::UI, "1.2").unwrap();
    dataset.put_str(tags::TDR_TYPE, VR::CS, "MACHINE").unwrap();
    dataset.put_str(tags::ABORT_FLAG, VR::CS, "SUCCESS").unwrap();
    dataset.put_str(tags::ALARM_DECISION, VR::CS, "ALARM").unwrap();
    dataset
        .put_str(tags::ALARM_DECISION_TIME, VR::DT, "20240311093000")
        .unwrap();
    dataset
        .put(tags::NUMBER_OF_TOTAL_OBJECTS, VR::US, dicos_value!(U16, [1]))
        .unwrap();
    dataset
        .put(tags::NUMBER_OF_ALARM_OBJECTS, VR::US, dicos_value!(U16, [1]))
        .unwrap();

    let mut threat = Item::new();
    threat
        .put(tags::POTENTIAL_THREAT_OBJECT_ID, VR::US, dicos_value!(U16, [0]))
        .unwrap();
    dataset.set_attribute(Attribute::sequence(tags::THREAT_SEQUENCE, vec![threat]));
    dataset
}

fn file_object(ts: TransferSyntax) -> FileDicosObject {
    FileDicosObject::with_meta(
        threat_report(),
        FileMetaTableBuilder::new().transfer_syntax(ts.uid()),
    )
    .unwrap()
}

#[test]
fn write_and_open_file_in_every_transfer_syntax() {
    let dir = tempfile::tempdir().unwrap();
    for ts in TransferSyntax::ALL {
        let obj = file_object(ts);
        let path = dir.path().join(format!("{}.dcs", ts.uid()));
        obj.write_to_file(&path).unwrap();

        let mut log = quiet_log();
        let read = open_file(&path, &mut log).unwrap();
        assert!(log.is_empty(), "{}: {}", ts, log);
        assert_eq!(read.meta().transfer_syntax(), Some(ts));
        assert_eq!(
            read.meta().media_storage_sop_class_uid,
            uids::DICOS_THREAT_DETECTION_REPORT_STORAGE
        );
        assert_eq!(read.meta().media_storage_sop_instance_uid, "1.2");
        assert_eq!(read.dataset(), obj.dataset());
    }
}

#[test]
fn threat_sequence_survives_a_round_trip() {
    let mut dataset = AttributeManager::new();
    dataset.put_str(tags::SOP_INSTANCE_UID, VR::UI, "1.2").unwrap();
    let mut item = Item::new();
    item.put(tags::POTENTIAL_THREAT_OBJECT_ID, VR::US, 0_u16).unwrap();
    dataset.set_attribute(Attribute::sequence(tags::THREAT_SEQUENCE, vec![item]));
    let obj = FileDicosObject::with_meta(
        dataset,
        FileMetaTableBuilder::new()
            .media_storage_sop_class_uid(uids::DICOS_THREAT_DETECTION_REPORT_STORAGE)
            .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN),
    )
    .unwrap();

    let mut stream = MemoryStream::new();
    obj.write_all(&mut stream).unwrap();

    let mut log = quiet_log();
    let read = from_reader(MemoryStream::from_vec(stream.into_inner()), &mut log).unwrap();
    let threats = read.dataset().items(tags::THREAT_SEQUENCE).unwrap();
    assert_eq!(threats.len(), 1);
    let id = threats[0]
        .find_attribute(tags::POTENTIAL_THREAT_OBJECT_ID)
        .unwrap();
    assert_eq!(id.value().uint16().unwrap(), 0);
}

#[test]
fn explicit_lengths_read_back_the_same() {
    let obj = file_object(TransferSyntax::ExplicitVRLittleEndian);
    let mut undefined = Vec::new();
    obj.write_all(&mut undefined).unwrap();
    let mut explicit = Vec::new();
    obj.write_all_with(&mut explicit, WriteOptions::explicit_lengths())
        .unwrap();
    assert_ne!(undefined, explicit);

    let mut log = quiet_log();
    let a = from_reader(&undefined[..], &mut log).unwrap();
    let b = from_reader(&explicit[..], &mut log).unwrap();
    assert_eq!(a, b);
    assert!(log.is_empty());
}

#[test]
fn preamble_is_optional() {
    let obj = file_object(TransferSyntax::ImplicitVRLittleEndian);
    let mut bytes = Vec::new();
    obj.write_all(&mut bytes).unwrap();
    let without_preamble = &bytes[128..];

    let mut log = quiet_log();
    let a = from_reader(&bytes[..], &mut log).unwrap();
    let b = from_reader(without_preamble, &mut log).unwrap();
    assert_eq!(a, b);

    let c = ReadOptions::new()
        .read_preamble(ReadPreamble::Never)
        .from_reader(without_preamble, &mut log)
        .unwrap();
    assert_eq!(a, c);

    assert!(ReadOptions::new()
        .read_preamble(ReadPreamble::Never)
        .from_reader(&bytes[..], &mut log)
        .is_err());
}

#[test]
fn fixed_buffer_refuses_to_grow() {
    let obj = file_object(TransferSyntax::ExplicitVRLittleEndian);
    let mut buffer = [0_u8; 64];
    let err = obj.write_all(SliceStream::new(&mut buffer)).unwrap_err();
    assert!(matches!(err, WriteError::WritePreamble { .. }));

    let mut buffer = vec![0_u8; 4096];
    let mut stream = SliceStream::new(&mut buffer);
    obj.write_all(&mut stream).unwrap();
    let written = stream.position() as usize;
    assert_eq!(&buffer[128..132], b"DICM");

    let mut log = quiet_log();
    let read = from_reader(&buffer[..written], &mut log).unwrap();
    assert_eq!(read.dataset(), obj.dataset());
}

#[test]
fn not_a_dicos_file() {
    let mut log = quiet_log();
    assert!(from_reader(&[0_u8; 256][..], &mut log).is_err());
}

#[test]
fn threat_report_module_from_file() {
    let obj = file_object(TransferSyntax::ExplicitVRBigEndian);
    let mut bytes = Vec::new();
    obj.write_all(&mut bytes).unwrap();

    let mut log = quiet_log();
    let read = from_reader(&bytes[..], &mut log).unwrap();
    let mut report = ThreatDetectionReportModule::new();
    assert_eq!(report.load(read.dataset(), &mut log), ModuleState::Valid);
    assert_eq!(report.abort_flag, Some(AbortFlag::Success));
    assert_eq!(report.alarm_decision, Some(AlarmDecision::Alarm));
    assert_eq!(report.threats.len(), 1);

    // an aborted inspection needs a reason
    let mut dataset = read.into_inner();
    dataset.put_str(tags::ABORT_FLAG, VR::CS, "ABORT").unwrap();
    assert_eq!(report.reload(&dataset, &mut log), ModuleState::Invalid);
    assert!(report.is_aborted());
    assert_eq!(log.num_errors(), 1);

    dataset.put_str(tags::ABORT_REASON, VR::CS, "NOT_REVIEWED").unwrap();
    assert_eq!(report.reload(&dataset, &mut log), ModuleState::Valid);

    // the typed view writes back the same attributes
    let mut emitted = AttributeManager::new();
    assert!(report.get_attributes(&mut emitted, &mut log));
    for attr in emitted.iter() {
        assert_eq!(dataset.find_attribute(attr.tag()), Some(attr));
    }
}
