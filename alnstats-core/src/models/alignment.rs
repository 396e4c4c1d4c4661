use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::errors::AlignmentError;
use crate::utils::get_dynamic_reader;

///
/// FastaRecord struct, representation of one aligned sequence in a FASTA
/// alignment file.
///
/// Residues are kept as raw bytes, case preserved, gap characters included.
/// The alphabet is not validated here.
///
#[derive(Eq, PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FastaRecord {
    pub id: String,
    pub seq: Vec<u8>,
}

///
/// Alignment struct, the in-memory representation of one multiple sequence
/// alignment file.
///
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Alignment {
    pub records: Vec<FastaRecord>,
    pub path: Option<PathBuf>,
}

impl Alignment {
    /// Number of sequences in the alignment.
    pub fn n_records(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Length of the longest sequence in the alignment.
    ///
    /// Consumers may use this as a sizing hint; it is not a bound on
    /// anything they compute.
    pub fn max_seq_len(&self) -> usize {
        self.records.iter().map(|r| r.seq.len()).max().unwrap_or(0)
    }

    /// Iterate over the raw residues of every sequence, in file order.
    pub fn iter_seqs(&self) -> impl Iterator<Item = &[u8]> {
        self.records.iter().map(|r| r.seq.as_slice())
    }

    ///
    /// Parse FASTA content from a buffered reader.
    ///
    /// Headers start with `>`; the id is the text before the first
    /// whitespace. Sequence lines may wrap and may contain internal
    /// whitespace, which is stripped. Empty lines are skipped.
    ///
    /// # Arguments:
    /// - reader: source of FASTA lines
    /// - origin: file path or label used in error messages
    fn from_reader<R: BufRead>(reader: R, origin: &str) -> Result<Self, AlignmentError> {
        let mut records: Vec<FastaRecord> = Vec::new();

        let mut current_id: Option<String> = None;
        let mut current_seq: Vec<u8> = Vec::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            if let Some(header) = line.strip_prefix('>') {
                if let Some(id) = current_id.take() {
                    records.push(FastaRecord {
                        id,
                        seq: std::mem::take(&mut current_seq),
                    });
                }

                let id = header.split_whitespace().next().unwrap_or(header);
                current_id = Some(id.to_string());
            } else {
                if current_id.is_none() {
                    return Err(AlignmentError::MissingHeader(origin.to_string()));
                }
                current_seq.extend(line.bytes().filter(|b| !b.is_ascii_whitespace()));
            }
        }

        if let Some(id) = current_id {
            records.push(FastaRecord {
                id,
                seq: current_seq,
            });
        }

        if records.is_empty() {
            return Err(AlignmentError::EmptyAlignment(origin.to_string()));
        }

        Ok(Alignment {
            records,
            path: None,
        })
    }
}

impl TryFrom<&Path> for Alignment {
    type Error = AlignmentError;

    ///
    /// Create a new [Alignment] from a FASTA file, gzip'd or not.
    ///
    /// # Arguments:
    /// - value: path to the alignment file on disk.
    fn try_from(value: &Path) -> Result<Self, AlignmentError> {
        let reader = get_dynamic_reader(value)
            .map_err(|e| AlignmentError::FileReadError(format!("{}", e)))?;

        let mut alignment = Alignment::from_reader(reader, &value.display().to_string())?;
        alignment.path = Some(value.to_owned());

        Ok(alignment)
    }
}

impl TryFrom<&str> for Alignment {
    type Error = AlignmentError;

    fn try_from(value: &str) -> Result<Self, AlignmentError> {
        Alignment::try_from(Path::new(value))
    }
}

impl TryFrom<PathBuf> for Alignment {
    type Error = AlignmentError;

    fn try_from(value: PathBuf) -> Result<Self, AlignmentError> {
        Alignment::try_from(value.as_path())
    }
}

impl TryFrom<&[u8]> for Alignment {
    type Error = AlignmentError;

    /// Parse an alignment from in-memory FASTA content.
    fn try_from(value: &[u8]) -> Result<Self, AlignmentError> {
        Alignment::from_reader(value, "<bytes>")
    }
}

impl From<Vec<FastaRecord>> for Alignment {
    fn from(records: Vec<FastaRecord>) -> Self {
        Alignment {
            records,
            path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_parse_simple_fasta() {
        let content = b">seq1\nACGT\n>seq2\nTG-A\n";
        let alignment = Alignment::try_from(&content[..]).unwrap();

        assert_eq!(alignment.n_records(), 2);
        assert_eq!(alignment.records[0].id, "seq1");
        assert_eq!(alignment.records[0].seq, b"ACGT");
        assert_eq!(alignment.records[1].id, "seq2");
        assert_eq!(alignment.records[1].seq, b"TG-A");
        assert_eq!(alignment.max_seq_len(), 4);
    }

    #[rstest]
    fn test_parse_multiline_and_empty_lines() {
        let content = b">seq1\nACGT\n\nTG CA\nAAAA\n";
        let alignment = Alignment::try_from(&content[..]).unwrap();

        assert_eq!(alignment.n_records(), 1);
        assert_eq!(alignment.records[0].seq, b"ACGTTGCAAAAA");
    }

    #[rstest]
    fn test_header_description_is_dropped_from_id() {
        let content = b">seq1 homo sapiens, exon 4\nAC-T\n";
        let alignment = Alignment::try_from(&content[..]).unwrap();

        assert_eq!(alignment.records[0].id, "seq1");
    }

    #[rstest]
    fn test_sequence_before_header_fails() {
        let content = b"ACGT\n>seq1\nTGCA\n";
        let result = Alignment::try_from(&content[..]);

        assert!(matches!(result, Err(AlignmentError::MissingHeader(_))));
    }

    #[rstest]
    fn test_empty_input_fails() {
        let result = Alignment::try_from(&b""[..]);

        assert!(matches!(result, Err(AlignmentError::EmptyAlignment(_))));
    }

    #[rstest]
    fn test_max_seq_len_is_longest_sequence() {
        let content = b">a\nAC--GTA\n>b\nACG\n";
        let alignment = Alignment::try_from(&content[..]).unwrap();

        assert_eq!(alignment.max_seq_len(), 7);
    }

    #[rstest]
    fn test_read_fasta_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aln.fa");
        std::fs::write(&path, ">s1\nAA---AA\n>s2\nAAAAAAA\n").unwrap();

        let alignment = Alignment::try_from(path.as_path()).unwrap();

        assert_eq!(alignment.n_records(), 2);
        assert_eq!(alignment.path, Some(path));
    }

    #[rstest]
    fn test_read_gzipped_fasta_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aln.fa.gz");

        let file = std::fs::File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(b">s1\nA-CG\n>s2\nAC-G\n").unwrap();
        encoder.finish().unwrap();

        let alignment = Alignment::try_from(path.as_path()).unwrap();

        assert_eq!(alignment.n_records(), 2);
        assert_eq!(alignment.records[0].seq, b"A-CG");
    }

    #[rstest]
    fn test_missing_file_fails() {
        let result = Alignment::try_from("/definitely/not/here.fa");

        assert!(matches!(result, Err(AlignmentError::FileReadError(_))));
    }
}
