//! An ordered, append-only collection of processing inputs.

use std::path::Path;

use chrono::NaiveDate;
use indexmap::IndexMap;
use log::{debug, info};

use imap_paths_parser::{ImapFilePath, parse_file_path};

use crate::{
    ImapPathsError,
    processing_input::{GroupKey, ProcessingInput, ProcessingInputType, merge_time_ranges},
};

/// Processing inputs in the order they were added.
///
/// A collection flattens to the ordered list of every member filename
/// ([`serialize`](Self::serialize)) and rebuilds its groups from such a list
/// ([`deserialize`](Self::deserialize)).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingInputCollection {
    processing_input: Vec<ProcessingInput>,
}

impl ProcessingInputCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_inputs(inputs: impl IntoIterator<Item = ProcessingInput>) -> Self {
        inputs.into_iter().collect()
    }

    /// Append an input after the existing ones.
    pub fn add(&mut self, input: ProcessingInput) {
        self.processing_input.push(input);
    }

    pub fn processing_input(&self) -> &[ProcessingInput] {
        &self.processing_input
    }

    pub fn len(&self) -> usize {
        self.processing_input.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processing_input.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProcessingInput> {
        self.processing_input.iter()
    }

    /// Every member filename, input by input, in insertion order.
    pub fn serialize(&self) -> Vec<String> {
        self.processing_input
            .iter()
            .flat_map(|input| input.filename_list().iter().cloned())
            .collect()
    }

    /// Parse `filenames` and append them as new processing inputs.
    ///
    /// Each filename is recognized by [`parse_file_path`]. Files of the same
    /// kind, source, data type and descriptor form one input; inputs are
    /// appended in the order their first file appears.
    ///
    /// # Errors
    ///
    /// Fails on the first unrecognized filename. The collection is left
    /// untouched in that case.
    pub fn deserialize<I>(&mut self, filenames: I) -> Result<(), ImapPathsError>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let mut groups: IndexMap<GroupKey, Vec<(String, ImapFilePath)>> = IndexMap::new();
        for filename in filenames {
            let path = filename.as_ref();
            let parsed = parse_file_path(path)?;
            groups
                .entry(GroupKey::of(&parsed))
                .or_default()
                .push((path.to_string_lossy().into_owned(), parsed));
        }

        let inputs = groups
            .into_iter()
            .map(|(key, members)| ProcessingInput::from_members(key, members))
            .collect::<Result<Vec<_>, _>>()?;

        info!(inputs = inputs.len(); "Deserialized processing inputs");
        self.processing_input.extend(inputs);
        Ok(())
    }

    /// The serialized filename list as a JSON array.
    pub fn to_json(&self) -> Result<String, ImapPathsError> {
        Ok(serde_json::to_string(&self.serialize())?)
    }

    /// Like [`deserialize`](Self::deserialize), reading a JSON array of
    /// filenames.
    pub fn deserialize_json(&mut self, json: &str) -> Result<(), ImapPathsError> {
        let filenames: Vec<String> = serde_json::from_str(json)?;
        self.deserialize(filenames)
    }

    pub fn get_science_files(&self) -> Vec<&ProcessingInput> {
        self.of_type(ProcessingInputType::ScienceFile)
    }

    pub fn get_ancillary_files(&self) -> Vec<&ProcessingInput> {
        self.of_type(ProcessingInputType::AncillaryFile)
    }

    pub fn get_spice_files(&self) -> Vec<&ProcessingInput> {
        self.of_type(ProcessingInputType::SpiceFile)
    }

    fn of_type(&self, input_type: ProcessingInputType) -> Vec<&ProcessingInput> {
        self.processing_input
            .iter()
            .filter(|input| input.input_type() == input_type)
            .collect()
    }

    /// Validated paths of every input from `source`, optionally restricted to
    /// one descriptor.
    pub fn get_file_paths(&self, source: &str, descriptor: Option<&str>) -> Vec<&ImapFilePath> {
        let paths: Vec<_> = self
            .processing_input
            .iter()
            .filter(|input| input.source() == source)
            .filter(|input| descriptor.is_none_or(|wanted| input.descriptor() == wanted))
            .flat_map(|input| input.imap_file_paths())
            .collect();

        debug!(source, descriptor:?, files = paths.len(); "Selected file paths");
        paths
    }

    /// Earliest start and latest end date over every input.
    pub fn get_time_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        merge_time_ranges(
            self.processing_input
                .iter()
                .filter_map(ProcessingInput::get_time_range),
        )
    }
}

impl FromIterator<ProcessingInput> for ProcessingInputCollection {
    fn from_iter<T: IntoIterator<Item = ProcessingInput>>(iter: T) -> Self {
        Self {
            processing_input: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ProcessingInputCollection {
    type Item = &'a ProcessingInput;
    type IntoIter = std::slice::Iter<'a, ProcessingInput>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_is_atomic() {
        let mut collection = ProcessingInputCollection::from_inputs([ProcessingInput::spice([
            "naif0012.tls",
        ])
        .unwrap()]);

        let err = collection
            .deserialize([
                "imap_mag_l1a_burst_20210101_v001.cdf",
                "not_an_imap_file.txt",
            ])
            .unwrap_err();

        assert!(matches!(err, ImapPathsError::Parse { .. }));
        assert_eq!(collection.serialize(), vec!["naif0012.tls"]);
    }

    #[test]
    fn test_deserialize_groups_in_first_seen_order() {
        let mut collection = ProcessingInputCollection::new();
        collection
            .deserialize([
                "imap_mag_l1a_norm-magi_20240312_v000.cdf",
                "naif0012.tls",
                "imap_mag_l1a_norm-magi_20240313_v000.cdf",
                "imap_2025_122_2025_122_01.spin.csv",
            ])
            .unwrap();

        let types: Vec<_> = collection.iter().map(ProcessingInput::input_type).collect();
        assert_eq!(
            types,
            [ProcessingInputType::ScienceFile, ProcessingInputType::SpiceFile]
        );
        assert_eq!(collection.processing_input()[0].filename_list().len(), 2);
        assert_eq!(collection.processing_input()[1].filename_list().len(), 2);
    }

    #[test]
    fn test_json_round_trip() {
        let collection = ProcessingInputCollection::from_inputs([ProcessingInput::ancillary([
            "imap_mag_l1b-cal_20250101_v001.cdf",
        ])
        .unwrap()]);

        let json = collection.to_json().unwrap();
        assert_eq!(json, r#"["imap_mag_l1b-cal_20250101_v001.cdf"]"#);

        let mut restored = ProcessingInputCollection::new();
        restored.deserialize_json(&json).unwrap();
        assert_eq!(restored, collection);
    }

    #[test]
    fn test_deserialize_json_rejects_non_array() {
        let mut collection = ProcessingInputCollection::new();

        let err = collection.deserialize_json(r#"{"files": []}"#).unwrap_err();

        assert!(matches!(err, ImapPathsError::Serialization(_)));
        assert!(collection.is_empty());
    }

    #[test]
    fn test_get_file_paths_filters_by_descriptor() {
        let collection = ProcessingInputCollection::from_inputs([
            ProcessingInput::science(["imap_mag_l1a_norm-magi_20240312_v000.cdf"]).unwrap(),
            ProcessingInput::science(["imap_mag_l1a_burst-magi_20240312_v000.cdf"]).unwrap(),
            ProcessingInput::science(["imap_swe_l1a_sci_20240312_v000.cdf"]).unwrap(),
        ]);

        assert_eq!(collection.get_file_paths("mag", None).len(), 2);
        assert_eq!(collection.get_file_paths("mag", Some("burst-magi")).len(), 1);
        assert!(collection.get_file_paths("hit", None).is_empty());
    }
}
