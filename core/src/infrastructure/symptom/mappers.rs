use chrono::{TimeZone, Utc};

use crate::domain::{
    common::entities::app_errors::CoreError,
    symptom::entities::{Severity, SymptomEntry},
};
use crate::entity::symptom_records::Model as SymptomRecordModel;

impl TryFrom<&SymptomRecordModel> for SymptomEntry {
    type Error = CoreError;

    fn try_from(model: &SymptomRecordModel) -> Result<Self, Self::Error> {
        Ok(SymptomEntry {
            id: model.id,
            patient_id: model.patient_id,
            name: model.name.clone(),
            severity: Severity::try_from(model.severity)?,
            duration_days: model.duration_days,
            notes: model.notes.clone(),
            recorded_by: model.recorded_by,
            recorded_at: Utc.from_utc_datetime(&model.recorded_at),
        })
    }
}

impl TryFrom<SymptomRecordModel> for SymptomEntry {
    type Error = CoreError;

    fn try_from(model: SymptomRecordModel) -> Result<Self, Self::Error> {
        SymptomEntry::try_from(&model)
    }
}
