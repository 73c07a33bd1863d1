mod utterance_record;

pub use utterance_record::UtteranceRecord;
