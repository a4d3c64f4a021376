//! Stream variant model
//!
//! Every stream the catalog can carry is one concrete variant of
//! [`StreamSettings`]. Shared field sets are factored into flat layer structs
//! (`StreamBase`, `HardwareFields`, ...) embedded by value in each variant
//! record; the VOD metadata is a second layer composed into the VOD variants.
//! The [`StreamType`] tag is the single source of truth for which field set a
//! variant carries and which aggregation bucket it lands in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::errors::ValidationError;

pub const MIN_STREAM_NAME_LENGTH: usize = 1;
pub const MAX_STREAM_NAME_LENGTH: usize = 64;
pub const MIN_URL_LENGTH: usize = 3;
pub const MAX_URL_LENGTH: usize = 2048;
pub const MIN_PRICE: f64 = 0.0;
pub const MAX_PRICE: f64 = 1000.0;
/// Endpoint lists (both input and output) are bounded to 1..=10 entries.
pub const MIN_ENDPOINTS: usize = 1;
pub const MAX_ENDPOINTS: usize = 10;
pub const MIN_RESTART_ATTEMPTS: u32 = 1;
pub const MAX_RESTART_ATTEMPTS: u32 = 1000;
pub const MAX_FRAME_RATE: u32 = 100;
pub const MIN_VOLUME: f64 = 0.0;
pub const MAX_VOLUME: f64 = 10.0;
pub const MAX_AUDIO_CHANNELS_COUNT: u32 = 8;
pub const MIN_LOGO_ALPHA: f64 = 0.0;
pub const MAX_LOGO_ALPHA: f64 = 1.0;
/// Timeshift chunk duration, seconds.
pub const MIN_TIMESHIFT_CHUNK_DURATION: u32 = 1;
pub const MAX_TIMESHIFT_CHUNK_DURATION: u32 = 600;
/// Timeshift chunk retention, hours.
pub const MIN_TIMESHIFT_CHUNK_LIFE_TIME: u32 = 1;
pub const MAX_TIMESHIFT_CHUNK_LIFE_TIME: u32 = 25;
/// Timeshift playback delay, minutes.
pub const MIN_TIMESHIFT_DELAY: u32 = 1;
pub const MAX_TIMESHIFT_DELAY: u32 = 14_400;
pub const MAX_USER_SCORE: u8 = 100;
pub const MIN_COUNTRY_LENGTH: usize = 2;
pub const MAX_COUNTRY_LENGTH: usize = 3;

/// Type tag identifying a concrete stream variant.
///
/// Discriminant values match the original wire encoding and must stay stable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum StreamType {
    Proxy = 0,
    VodProxy = 1,
    Relay = 2,
    Encode = 3,
    TimeshiftPlayer = 4,
    TimeshiftRecorder = 5,
    Catchup = 6,
    TestLife = 7,
    VodRelay = 8,
    VodEncode = 9,
    CodRelay = 10,
    CodEncode = 11,
    Event = 12,
}

/// Aggregation bucket a stream variant belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Channel,
    Vod,
}

impl StreamType {
    /// Classify a type tag into its aggregation bucket.
    ///
    /// This is the single classification site: exactly the three VOD delivery
    /// tags map to [`StreamKind::Vod`]; everything else, including `Event`,
    /// is served as a channel.
    pub fn kind(self) -> StreamKind {
        match self {
            StreamType::VodProxy | StreamType::VodRelay | StreamType::VodEncode => StreamKind::Vod,
            StreamType::Proxy
            | StreamType::Relay
            | StreamType::Encode
            | StreamType::TimeshiftPlayer
            | StreamType::TimeshiftRecorder
            | StreamType::Catchup
            | StreamType::TestLife
            | StreamType::CodRelay
            | StreamType::CodEncode
            | StreamType::Event => StreamKind::Channel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserAgent {
    Gstreamer,
    Vlc,
    Ffmpeg,
    Wink,
}

/// Syslog-style verbosity levels for the hardware stream worker.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum StreamLogLevel {
    Emerg = 0,
    Alert = 1,
    Crit = 2,
    Err = 3,
    Warning = 4,
    Notice = 5,
    #[default]
    Info = 6,
    Debug = 7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VideoParser {
    #[default]
    H264Parse,
    H265Parse,
    TsParse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AudioParser {
    #[default]
    AacParse,
    Ac3Parse,
    MpegAudioParse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VideoCodec {
    H264,
    H265,
    Mpeg2,
    Copy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AudioCodec {
    Aac,
    Mp3,
    Ac3,
    Copy,
}

/// VOD catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VodType {
    Vods,
    Series,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputEndpoint {
    pub id: u32,
    pub uri: String,
    pub http_root: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HttpProxy {
    pub url: String,
    pub user: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputEndpoint {
    pub id: u32,
    pub uri: String,
    pub user_agent: UserAgent,
    pub stream_link: bool,
    pub proxy: Option<HttpProxy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Logo {
    pub path: Option<String>,
    pub x: i32,
    pub y: i32,
    pub alpha: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rational {
    pub num: u32,
    pub den: u32,
}

impl Default for Rational {
    fn default() -> Self {
        Self { num: 16, den: 9 }
    }
}

/// Fields shared by every stream variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamBase {
    pub id: Uuid,
    pub tvg_id: Option<String>,
    pub name: String,
    pub tvg_name: Option<String>,
    pub tvg_logo: String,
    pub group: Option<String>,
    pub price: f64,
    pub output: Vec<OutputEndpoint>,
    pub visible: bool,
}

impl Default for StreamBase {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            tvg_id: None,
            name: String::new(),
            tvg_name: None,
            tvg_logo: String::new(),
            group: None,
            price: 0.0,
            output: Vec::new(),
            visible: true,
        }
    }
}

/// Fields shared by every variant that drives a worker process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareFields {
    pub input: Vec<InputEndpoint>,
    pub audio_select: Option<i32>,
    pub have_video: bool,
    pub have_audio: bool,
    pub log_level: StreamLogLevel,
    #[serde(rename = "loop")]
    pub loop_play: bool,
    pub avformat: bool,
    pub restart_attempts: u32,
    pub auto_exit_time: Option<u32>,
}

impl Default for HardwareFields {
    fn default() -> Self {
        Self {
            input: Vec::new(),
            audio_select: None,
            have_video: true,
            have_audio: true,
            log_level: StreamLogLevel::Info,
            loop_play: false,
            avformat: false,
            restart_attempts: MIN_RESTART_ATTEMPTS,
            auto_exit_time: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayFields {
    pub video_parser: VideoParser,
    pub audio_parser: AudioParser,
}

impl Default for RelayFields {
    fn default() -> Self {
        Self {
            video_parser: VideoParser::H264Parse,
            audio_parser: AudioParser::AacParse,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodeFields {
    pub relay_video: bool,
    pub relay_audio: bool,
    pub deinterlace: bool,
    pub frame_rate: u32,
    pub volume: f64,
    pub video_codec: VideoCodec,
    pub audio_codec: AudioCodec,
    pub audio_channels_count: u32,
    pub size: Size,
    pub video_bit_rate: u32,
    pub audio_bit_rate: u32,
    pub logo: Logo,
    pub aspect_ratio: Rational,
}

impl Default for EncodeFields {
    fn default() -> Self {
        Self {
            relay_video: false,
            relay_audio: false,
            deinterlace: false,
            frame_rate: 25,
            volume: 1.0,
            video_codec: VideoCodec::H264,
            audio_codec: AudioCodec::Aac,
            audio_channels_count: 2,
            size: Size::default(),
            video_bit_rate: 0,
            audio_bit_rate: 0,
            logo: Logo::default(),
            aspect_ratio: Rational::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeshiftRecorderFields {
    /// Chunk duration, seconds.
    pub chunk_duration: u32,
    /// Chunk retention, hours.
    pub chunk_life_time: u32,
}

impl Default for TimeshiftRecorderFields {
    fn default() -> Self {
        Self {
            chunk_duration: 120,
            chunk_life_time: 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeshiftPlayerFields {
    pub timeshift_dir: String,
    /// Playback delay, minutes.
    pub timeshift_delay: u32,
}

impl Default for TimeshiftPlayerFields {
    fn default() -> Self {
        Self {
            timeshift_dir: String::new(),
            timeshift_delay: MIN_TIMESHIFT_DELAY,
        }
    }
}

/// VOD metadata layer composed into the VOD-carrying variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VodFields {
    pub vod_type: Option<VodType>,
    pub description: Option<String>,
    pub preview_icon: String,
    pub trailer_url: String,
    pub user_score: u8,
    pub prime_date: DateTime<Utc>,
    pub country: String,
    pub duration_ms: u64,
}

impl Default for VodFields {
    fn default() -> Self {
        Self {
            vod_type: None,
            description: None,
            preview_icon: String::new(),
            trailer_url: String::new(),
            user_score: 0,
            prime_date: DateTime::<Utc>::UNIX_EPOCH,
            country: String::new(),
            duration_ms: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProxyStream {
    #[serde(flatten)]
    pub base: StreamBase,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RelayStream {
    #[serde(flatten)]
    pub base: StreamBase,
    #[serde(flatten)]
    pub hardware: HardwareFields,
    #[serde(flatten)]
    pub relay: RelayFields,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EncodeStream {
    #[serde(flatten)]
    pub base: StreamBase,
    #[serde(flatten)]
    pub hardware: HardwareFields,
    #[serde(flatten)]
    pub encode: EncodeFields,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeshiftRecorderStream {
    #[serde(flatten)]
    pub base: StreamBase,
    #[serde(flatten)]
    pub hardware: HardwareFields,
    #[serde(flatten)]
    pub relay: RelayFields,
    #[serde(flatten)]
    pub timeshift: TimeshiftRecorderFields,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeshiftPlayerStream {
    #[serde(flatten)]
    pub base: StreamBase,
    #[serde(flatten)]
    pub hardware: HardwareFields,
    #[serde(flatten)]
    pub relay: RelayFields,
    #[serde(flatten)]
    pub player: TimeshiftPlayerFields,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VodProxyStream {
    #[serde(flatten)]
    pub base: StreamBase,
    #[serde(flatten)]
    pub vod: VodFields,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VodRelayStream {
    #[serde(flatten)]
    pub base: StreamBase,
    #[serde(flatten)]
    pub hardware: HardwareFields,
    #[serde(flatten)]
    pub relay: RelayFields,
    #[serde(flatten)]
    pub vod: VodFields,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VodEncodeStream {
    #[serde(flatten)]
    pub base: StreamBase,
    #[serde(flatten)]
    pub hardware: HardwareFields,
    #[serde(flatten)]
    pub encode: EncodeFields,
    #[serde(flatten)]
    pub vod: VodFields,
}

/// One concrete stream entity, tagged by variant.
///
/// `Catchup` shares the recorder's record, `TestLife`/`CodRelay` share the
/// relay's, `CodEncode` the encoder's, and `Event` the VOD-encode record with
/// a relaxed `vod_type` requirement. Those aliases differ only by tag; the
/// tag routes classification and policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamSettings {
    Proxy(ProxyStream),
    VodProxy(VodProxyStream),
    Relay(RelayStream),
    Encode(EncodeStream),
    TimeshiftPlayer(TimeshiftPlayerStream),
    TimeshiftRecorder(TimeshiftRecorderStream),
    Catchup(TimeshiftRecorderStream),
    TestLife(RelayStream),
    VodRelay(VodRelayStream),
    VodEncode(VodEncodeStream),
    CodRelay(RelayStream),
    CodEncode(EncodeStream),
    Event(VodEncodeStream),
}

impl StreamSettings {
    pub fn stream_type(&self) -> StreamType {
        match self {
            StreamSettings::Proxy(_) => StreamType::Proxy,
            StreamSettings::VodProxy(_) => StreamType::VodProxy,
            StreamSettings::Relay(_) => StreamType::Relay,
            StreamSettings::Encode(_) => StreamType::Encode,
            StreamSettings::TimeshiftPlayer(_) => StreamType::TimeshiftPlayer,
            StreamSettings::TimeshiftRecorder(_) => StreamType::TimeshiftRecorder,
            StreamSettings::Catchup(_) => StreamType::Catchup,
            StreamSettings::TestLife(_) => StreamType::TestLife,
            StreamSettings::VodRelay(_) => StreamType::VodRelay,
            StreamSettings::VodEncode(_) => StreamType::VodEncode,
            StreamSettings::CodRelay(_) => StreamType::CodRelay,
            StreamSettings::CodEncode(_) => StreamType::CodEncode,
            StreamSettings::Event(_) => StreamType::Event,
        }
    }

    pub fn kind(&self) -> StreamKind {
        self.stream_type().kind()
    }

    pub fn base(&self) -> &StreamBase {
        match self {
            StreamSettings::Proxy(s) => &s.base,
            StreamSettings::VodProxy(s) => &s.base,
            StreamSettings::Relay(s) | StreamSettings::TestLife(s) | StreamSettings::CodRelay(s) => {
                &s.base
            }
            StreamSettings::Encode(s) | StreamSettings::CodEncode(s) => &s.base,
            StreamSettings::TimeshiftPlayer(s) => &s.base,
            StreamSettings::TimeshiftRecorder(s) | StreamSettings::Catchup(s) => &s.base,
            StreamSettings::VodRelay(s) => &s.base,
            StreamSettings::VodEncode(s) | StreamSettings::Event(s) => &s.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut StreamBase {
        match self {
            StreamSettings::Proxy(s) => &mut s.base,
            StreamSettings::VodProxy(s) => &mut s.base,
            StreamSettings::Relay(s) | StreamSettings::TestLife(s) | StreamSettings::CodRelay(s) => {
                &mut s.base
            }
            StreamSettings::Encode(s) | StreamSettings::CodEncode(s) => &mut s.base,
            StreamSettings::TimeshiftPlayer(s) => &mut s.base,
            StreamSettings::TimeshiftRecorder(s) | StreamSettings::Catchup(s) => &mut s.base,
            StreamSettings::VodRelay(s) => &mut s.base,
            StreamSettings::VodEncode(s) | StreamSettings::Event(s) => &mut s.base,
        }
    }

    pub fn id(&self) -> Uuid {
        self.base().id
    }

    pub fn hardware(&self) -> Option<&HardwareFields> {
        match self {
            StreamSettings::Proxy(_) | StreamSettings::VodProxy(_) => None,
            StreamSettings::Relay(s) | StreamSettings::TestLife(s) | StreamSettings::CodRelay(s) => {
                Some(&s.hardware)
            }
            StreamSettings::Encode(s) | StreamSettings::CodEncode(s) => Some(&s.hardware),
            StreamSettings::TimeshiftPlayer(s) => Some(&s.hardware),
            StreamSettings::TimeshiftRecorder(s) | StreamSettings::Catchup(s) => Some(&s.hardware),
            StreamSettings::VodRelay(s) => Some(&s.hardware),
            StreamSettings::VodEncode(s) | StreamSettings::Event(s) => Some(&s.hardware),
        }
    }

    pub fn vod_fields(&self) -> Option<&VodFields> {
        match self {
            StreamSettings::VodProxy(s) => Some(&s.vod),
            StreamSettings::VodRelay(s) => Some(&s.vod),
            StreamSettings::VodEncode(s) | StreamSettings::Event(s) => Some(&s.vod),
            _ => None,
        }
    }

    /// Check that this variant's full field set is present and within bounds.
    ///
    /// A freshly constructed variant carries defaults for every ancestor
    /// layer; the transport adapter must fill the required fields before the
    /// entity is considered valid. Callers gate persistence on this check.
    pub fn is_complete(&self) -> Result<(), ValidationError> {
        let base = self.base();
        validate_length("name", &base.name, MIN_STREAM_NAME_LENGTH, MAX_STREAM_NAME_LENGTH)?;
        validate_url("tvg_logo", &base.tvg_logo)?;
        validate_range_f64("price", base.price, MIN_PRICE, MAX_PRICE)?;
        validate_list_size("output", base.output.len(), MIN_ENDPOINTS, MAX_ENDPOINTS)?;
        for endpoint in &base.output {
            validate_url("output.uri", &endpoint.uri)?;
        }

        if let Some(hardware) = self.hardware() {
            validate_list_size("input", hardware.input.len(), MIN_ENDPOINTS, MAX_ENDPOINTS)?;
            for endpoint in &hardware.input {
                validate_url("input.uri", &endpoint.uri)?;
            }
            validate_range_u32(
                "restart_attempts",
                hardware.restart_attempts,
                MIN_RESTART_ATTEMPTS,
                MAX_RESTART_ATTEMPTS,
            )?;
        }

        match self {
            StreamSettings::Encode(s) | StreamSettings::CodEncode(s) => {
                validate_encode_fields(&s.encode)?
            }
            StreamSettings::VodEncode(s) | StreamSettings::Event(s) => {
                validate_encode_fields(&s.encode)?
            }
            StreamSettings::TimeshiftRecorder(s) | StreamSettings::Catchup(s) => {
                validate_range_u32(
                    "timeshift_chunk_duration",
                    s.timeshift.chunk_duration,
                    MIN_TIMESHIFT_CHUNK_DURATION,
                    MAX_TIMESHIFT_CHUNK_DURATION,
                )?;
                validate_range_u32(
                    "timeshift_chunk_life_time",
                    s.timeshift.chunk_life_time,
                    MIN_TIMESHIFT_CHUNK_LIFE_TIME,
                    MAX_TIMESHIFT_CHUNK_LIFE_TIME,
                )?;
            }
            StreamSettings::TimeshiftPlayer(s) => {
                if s.player.timeshift_dir.is_empty() {
                    return Err(ValidationError::Required {
                        field: "timeshift_dir",
                    });
                }
                validate_range_u32(
                    "timeshift_delay",
                    s.player.timeshift_delay,
                    MIN_TIMESHIFT_DELAY,
                    MAX_TIMESHIFT_DELAY,
                )?;
            }
            _ => {}
        }

        if let Some(vod) = self.vod_fields() {
            validate_url("preview_icon", &vod.preview_icon)?;
            validate_url("trailer_url", &vod.trailer_url)?;
            validate_range_u32("user_score", vod.user_score as u32, 0, MAX_USER_SCORE as u32)?;
            validate_length("country", &vod.country, MIN_COUNTRY_LENGTH, MAX_COUNTRY_LENGTH)?;
            // Events are scheduled before their catalog category is known.
            if vod.vod_type.is_none() && self.stream_type() != StreamType::Event {
                return Err(ValidationError::Required { field: "vod_type" });
            }
        }

        Ok(())
    }
}

fn validate_encode_fields(encode: &EncodeFields) -> Result<(), ValidationError> {
    validate_range_u32("frame_rate", encode.frame_rate, 0, MAX_FRAME_RATE)?;
    validate_range_f64("volume", encode.volume, MIN_VOLUME, MAX_VOLUME)?;
    validate_range_u32(
        "audio_channels_count",
        encode.audio_channels_count,
        0,
        MAX_AUDIO_CHANNELS_COUNT,
    )?;
    validate_range_f64("logo.alpha", encode.logo.alpha, MIN_LOGO_ALPHA, MAX_LOGO_ALPHA)?;
    if encode.aspect_ratio.den == 0 {
        return Err(ValidationError::ValueOutOfRange {
            field: "aspect_ratio.den",
            min: 1.0,
            max: u32::MAX as f64,
        });
    }
    Ok(())
}

pub(crate) fn validate_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ValidationError::LengthOutOfRange { field, min, max });
    }
    Ok(())
}

pub(crate) fn validate_url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < MIN_URL_LENGTH || len > MAX_URL_LENGTH {
        return Err(ValidationError::LengthOutOfRange {
            field,
            min: MIN_URL_LENGTH,
            max: MAX_URL_LENGTH,
        });
    }
    url::Url::parse(value).map_err(|_| ValidationError::InvalidUrl { field })?;
    Ok(())
}

pub(crate) fn validate_range_f64(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ValidationError::ValueOutOfRange { field, min, max });
    }
    Ok(())
}

pub(crate) fn validate_range_u32(
    field: &'static str,
    value: u32,
    min: u32,
    max: u32,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::ValueOutOfRange {
            field,
            min: min as f64,
            max: max as f64,
        });
    }
    Ok(())
}

pub(crate) fn validate_list_size(
    field: &'static str,
    len: usize,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    if len < min || len > max {
        return Err(ValidationError::ListSizeOutOfRange { field, min, max });
    }
    Ok(())
}
