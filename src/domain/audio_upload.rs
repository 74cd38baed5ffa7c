/// One user-submitted audio clip, owned by a single in-flight run.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioUpload {
    pub filename: String,
    pub format: AudioFormat,
    pub data: Vec<u8>,
}

/// The two container types accepted at the upload boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Mp3,
    Wav,
}

impl AudioFormat {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "audio/mpeg" | "audio/mp3" => Some(Self::Mp3),
            "audio/wav" | "audio/x-wav" | "audio/wave" => Some(Self::Wav),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
        }
    }
}

impl AudioUpload {
    pub fn new(filename: String, format: AudioFormat, data: Vec<u8>) -> Self {
        Self {
            filename,
            format,
            data,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }
}
