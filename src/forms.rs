//! Transport adapter contract: validated field bags per stream variant.
//!
//! A transport layer (HTTP form, API payload) collects one bag per field
//! layer and hands the composed per-variant form to `make_entry` /
//! `update_entry`. Bags validate bounds, required-ness and enum membership
//! before writing a single field, and never invent defaults: a fresh entity
//! starts from the layer defaults and the bag overwrites exactly the fields
//! it declares. Layers apply outer-to-inner, ancestor fields before
//! variant-specific ones; multi-layer forms stage onto a copy of the entity
//! and commit only once every layer validates, so a failing inner layer
//! leaves the entity untouched.

use chrono::{DateTime, Utc};

use crate::errors::{ValidationError, ValidationResult};
use crate::models::stream::{
    self, AudioParser, EncodeFields, EncodeStream, HardwareFields, InputEndpoint, Logo,
    OutputEndpoint, ProxyStream, Rational, RelayFields, RelayStream, Size, StreamBase,
    StreamLogLevel, StreamSettings, StreamType, TimeshiftPlayerFields, TimeshiftPlayerStream,
    TimeshiftRecorderFields, TimeshiftRecorderStream, VideoParser, VodEncodeStream, VodFields,
    VodProxyStream, VodRelayStream, VodType, AudioCodec, VideoCodec,
};

/// Base-layer fields shared by every variant.
#[derive(Debug, Clone, Default)]
pub struct StreamFieldBag {
    pub tvg_id: Option<String>,
    pub name: String,
    pub tvg_name: Option<String>,
    pub tvg_logo: String,
    pub group: Option<String>,
    pub price: f64,
    pub output: Vec<OutputEndpoint>,
    pub visible: bool,
}

impl StreamFieldBag {
    pub fn apply(&self, base: &mut StreamBase) -> ValidationResult<()> {
        stream::validate_length(
            "name",
            &self.name,
            stream::MIN_STREAM_NAME_LENGTH,
            stream::MAX_STREAM_NAME_LENGTH,
        )?;
        stream::validate_url("tvg_logo", &self.tvg_logo)?;
        stream::validate_range_f64("price", self.price, stream::MIN_PRICE, stream::MAX_PRICE)?;
        stream::validate_list_size(
            "output",
            self.output.len(),
            stream::MIN_ENDPOINTS,
            stream::MAX_ENDPOINTS,
        )?;
        for endpoint in &self.output {
            stream::validate_url("output.uri", &endpoint.uri)?;
        }

        base.tvg_id = self.tvg_id.clone();
        base.name = self.name.clone();
        base.tvg_name = self.tvg_name.clone();
        base.tvg_logo = self.tvg_logo.clone();
        base.group = self.group.clone();
        base.price = self.price;
        base.output = self.output.clone();
        base.visible = self.visible;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct HardwareFieldBag {
    pub input: Vec<InputEndpoint>,
    pub audio_select: Option<i32>,
    pub have_video: bool,
    pub have_audio: bool,
    pub log_level: StreamLogLevel,
    pub loop_play: bool,
    pub avformat: bool,
    pub restart_attempts: u32,
    pub auto_exit_time: Option<u32>,
}

impl Default for HardwareFieldBag {
    fn default() -> Self {
        let defaults = HardwareFields::default();
        Self {
            input: defaults.input,
            audio_select: defaults.audio_select,
            have_video: defaults.have_video,
            have_audio: defaults.have_audio,
            log_level: defaults.log_level,
            loop_play: defaults.loop_play,
            avformat: defaults.avformat,
            restart_attempts: defaults.restart_attempts,
            auto_exit_time: defaults.auto_exit_time,
        }
    }
}

impl HardwareFieldBag {
    pub fn apply(&self, hardware: &mut HardwareFields) -> ValidationResult<()> {
        stream::validate_list_size(
            "input",
            self.input.len(),
            stream::MIN_ENDPOINTS,
            stream::MAX_ENDPOINTS,
        )?;
        for endpoint in &self.input {
            stream::validate_url("input.uri", &endpoint.uri)?;
        }
        stream::validate_range_u32(
            "restart_attempts",
            self.restart_attempts,
            stream::MIN_RESTART_ATTEMPTS,
            stream::MAX_RESTART_ATTEMPTS,
        )?;

        hardware.input = self.input.clone();
        hardware.audio_select = self.audio_select;
        hardware.have_video = self.have_video;
        hardware.have_audio = self.have_audio;
        hardware.log_level = self.log_level;
        hardware.loop_play = self.loop_play;
        hardware.avformat = self.avformat;
        hardware.restart_attempts = self.restart_attempts;
        hardware.auto_exit_time = self.auto_exit_time;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RelayFieldBag {
    pub video_parser: VideoParser,
    pub audio_parser: AudioParser,
}

impl RelayFieldBag {
    pub fn apply(&self, relay: &mut RelayFields) -> ValidationResult<()> {
        relay.video_parser = self.video_parser;
        relay.audio_parser = self.audio_parser;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct EncodeFieldBag {
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

impl Default for EncodeFieldBag {
    fn default() -> Self {
        let defaults = EncodeFields::default();
        Self {
            relay_video: defaults.relay_video,
            relay_audio: defaults.relay_audio,
            deinterlace: defaults.deinterlace,
            frame_rate: defaults.frame_rate,
            volume: defaults.volume,
            video_codec: defaults.video_codec,
            audio_codec: defaults.audio_codec,
            audio_channels_count: defaults.audio_channels_count,
            size: defaults.size,
            video_bit_rate: defaults.video_bit_rate,
            audio_bit_rate: defaults.audio_bit_rate,
            logo: defaults.logo,
            aspect_ratio: defaults.aspect_ratio,
        }
    }
}

impl EncodeFieldBag {
    pub fn apply(&self, encode: &mut EncodeFields) -> ValidationResult<()> {
        stream::validate_range_u32("frame_rate", self.frame_rate, 0, stream::MAX_FRAME_RATE)?;
        stream::validate_range_f64("volume", self.volume, stream::MIN_VOLUME, stream::MAX_VOLUME)?;
        stream::validate_range_u32(
            "audio_channels_count",
            self.audio_channels_count,
            0,
            stream::MAX_AUDIO_CHANNELS_COUNT,
        )?;
        stream::validate_range_f64(
            "logo.alpha",
            self.logo.alpha,
            stream::MIN_LOGO_ALPHA,
            stream::MAX_LOGO_ALPHA,
        )?;
        if self.aspect_ratio.den == 0 {
            return Err(ValidationError::ValueOutOfRange {
                field: "aspect_ratio.den",
                min: 1.0,
                max: u32::MAX as f64,
            });
        }

        encode.relay_video = self.relay_video;
        encode.relay_audio = self.relay_audio;
        encode.deinterlace = self.deinterlace;
        encode.frame_rate = self.frame_rate;
        encode.volume = self.volume;
        encode.video_codec = self.video_codec;
        encode.audio_codec = self.audio_codec;
        encode.audio_channels_count = self.audio_channels_count;
        encode.size = self.size;
        encode.video_bit_rate = self.video_bit_rate;
        encode.audio_bit_rate = self.audio_bit_rate;
        encode.logo = self.logo.clone();
        encode.aspect_ratio = self.aspect_ratio;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimeshiftRecorderFieldBag {
    pub chunk_duration: u32,
    pub chunk_life_time: u32,
}

impl TimeshiftRecorderFieldBag {
    pub fn apply(&self, timeshift: &mut TimeshiftRecorderFields) -> ValidationResult<()> {
        stream::validate_range_u32(
            "timeshift_chunk_duration",
            self.chunk_duration,
            stream::MIN_TIMESHIFT_CHUNK_DURATION,
            stream::MAX_TIMESHIFT_CHUNK_DURATION,
        )?;
        stream::validate_range_u32(
            "timeshift_chunk_life_time",
            self.chunk_life_time,
            stream::MIN_TIMESHIFT_CHUNK_LIFE_TIME,
            stream::MAX_TIMESHIFT_CHUNK_LIFE_TIME,
        )?;
        timeshift.chunk_duration = self.chunk_duration;
        timeshift.chunk_life_time = self.chunk_life_time;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimeshiftPlayerFieldBag {
    pub timeshift_dir: String,
    pub timeshift_delay: u32,
}

impl TimeshiftPlayerFieldBag {
    pub fn apply(&self, player: &mut TimeshiftPlayerFields) -> ValidationResult<()> {
        if self.timeshift_dir.is_empty() {
            return Err(ValidationError::Required {
                field: "timeshift_dir",
            });
        }
        stream::validate_range_u32(
            "timeshift_delay",
            self.timeshift_delay,
            stream::MIN_TIMESHIFT_DELAY,
            stream::MAX_TIMESHIFT_DELAY,
        )?;
        player.timeshift_dir = self.timeshift_dir.clone();
        player.timeshift_delay = self.timeshift_delay;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct VodFieldBag {
    pub vod_type: Option<VodType>,
    pub description: Option<String>,
    pub preview_icon: String,
    pub trailer_url: String,
    pub user_score: u8,
    pub prime_date: DateTime<Utc>,
    pub country: String,
    pub duration_ms: u64,
}

impl Default for VodFieldBag {
    fn default() -> Self {
        let defaults = VodFields::default();
        Self {
            vod_type: defaults.vod_type,
            description: defaults.description,
            preview_icon: defaults.preview_icon,
            trailer_url: defaults.trailer_url,
            user_score: defaults.user_score,
            prime_date: defaults.prime_date,
            country: defaults.country,
            duration_ms: defaults.duration_ms,
        }
    }
}

impl VodFieldBag {
    /// `require_vod_type` is relaxed only for event streams.
    pub fn apply(&self, vod: &mut VodFields, require_vod_type: bool) -> ValidationResult<()> {
        if require_vod_type && self.vod_type.is_none() {
            return Err(ValidationError::Required { field: "vod_type" });
        }
        stream::validate_url("preview_icon", &self.preview_icon)?;
        stream::validate_url("trailer_url", &self.trailer_url)?;
        stream::validate_range_u32(
            "user_score",
            self.user_score as u32,
            0,
            stream::MAX_USER_SCORE as u32,
        )?;
        stream::validate_length(
            "country",
            &self.country,
            stream::MIN_COUNTRY_LENGTH,
            stream::MAX_COUNTRY_LENGTH,
        )?;

        vod.vod_type = self.vod_type;
        vod.description = self.description.clone();
        vod.preview_icon = self.preview_icon.clone();
        vod.trailer_url = self.trailer_url.clone();
        vod.user_score = self.user_score;
        vod.prime_date = self.prime_date;
        vod.country = self.country.clone();
        vod.duration_ms = self.duration_ms;
        Ok(())
    }
}

fn variant_mismatch(expected: StreamType, entry: &StreamSettings) -> ValidationError {
    ValidationError::VariantMismatch {
        expected,
        actual: entry.stream_type(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProxyStreamForm {
    pub stream: StreamFieldBag,
}

impl ProxyStreamForm {
    pub fn make_entry(&self) -> ValidationResult<StreamSettings> {
        let mut entry = StreamSettings::Proxy(ProxyStream::default());
        self.update_entry(&mut entry)?;
        Ok(entry)
    }

    pub fn update_entry(&self, entry: &mut StreamSettings) -> ValidationResult<()> {
        let StreamSettings::Proxy(proxy) = entry else {
            return Err(variant_mismatch(StreamType::Proxy, entry));
        };
        self.stream.apply(&mut proxy.base)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RelayStreamForm {
    pub stream: StreamFieldBag,
    pub hardware: HardwareFieldBag,
    pub relay: RelayFieldBag,
}

impl RelayStreamForm {
    pub fn make_entry(&self) -> ValidationResult<StreamSettings> {
        let mut entry = StreamSettings::Relay(RelayStream::default());
        self.update_entry(&mut entry)?;
        Ok(entry)
    }

    pub fn update_entry(&self, entry: &mut StreamSettings) -> ValidationResult<()> {
        let StreamSettings::Relay(relay) = entry else {
            return Err(variant_mismatch(StreamType::Relay, entry));
        };
        self.apply_layers(relay)
    }

    fn apply_layers(&self, relay: &mut RelayStream) -> ValidationResult<()> {
        let mut staged = relay.clone();
        self.stream.apply(&mut staged.base)?;
        self.hardware.apply(&mut staged.hardware)?;
        self.relay.apply(&mut staged.relay)?;
        *relay = staged;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct EncodeStreamForm {
    pub stream: StreamFieldBag,
    pub hardware: HardwareFieldBag,
    pub encode: EncodeFieldBag,
}

impl EncodeStreamForm {
    pub fn make_entry(&self) -> ValidationResult<StreamSettings> {
        let mut entry = StreamSettings::Encode(EncodeStream::default());
        self.update_entry(&mut entry)?;
        Ok(entry)
    }

    pub fn update_entry(&self, entry: &mut StreamSettings) -> ValidationResult<()> {
        let StreamSettings::Encode(encode) = entry else {
            return Err(variant_mismatch(StreamType::Encode, entry));
        };
        self.apply_layers(encode)
    }

    fn apply_layers(&self, encode: &mut EncodeStream) -> ValidationResult<()> {
        let mut staged = encode.clone();
        self.stream.apply(&mut staged.base)?;
        self.hardware.apply(&mut staged.hardware)?;
        self.encode.apply(&mut staged.encode)?;
        *encode = staged;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimeshiftRecorderStreamForm {
    pub stream: StreamFieldBag,
    pub hardware: HardwareFieldBag,
    pub relay: RelayFieldBag,
    pub timeshift: TimeshiftRecorderFieldBag,
}

impl TimeshiftRecorderStreamForm {
    pub fn make_entry(&self) -> ValidationResult<StreamSettings> {
        let mut entry = StreamSettings::TimeshiftRecorder(TimeshiftRecorderStream::default());
        self.update_entry(&mut entry)?;
        Ok(entry)
    }

    pub fn update_entry(&self, entry: &mut StreamSettings) -> ValidationResult<()> {
        let StreamSettings::TimeshiftRecorder(recorder) = entry else {
            return Err(variant_mismatch(StreamType::TimeshiftRecorder, entry));
        };
        self.apply_layers(recorder)
    }

    fn apply_layers(&self, recorder: &mut TimeshiftRecorderStream) -> ValidationResult<()> {
        let mut staged = recorder.clone();
        self.stream.apply(&mut staged.base)?;
        self.hardware.apply(&mut staged.hardware)?;
        self.relay.apply(&mut staged.relay)?;
        self.timeshift.apply(&mut staged.timeshift)?;
        *recorder = staged;
        Ok(())
    }
}

/// Catch-up records share the recorder's field set; only the tag differs.
#[derive(Debug, Clone, Default)]
pub struct CatchupStreamForm {
    pub recorder: TimeshiftRecorderStreamForm,
}

impl CatchupStreamForm {
    pub fn make_entry(&self) -> ValidationResult<StreamSettings> {
        let mut entry = StreamSettings::Catchup(TimeshiftRecorderStream::default());
        self.update_entry(&mut entry)?;
        Ok(entry)
    }

    pub fn update_entry(&self, entry: &mut StreamSettings) -> ValidationResult<()> {
        let StreamSettings::Catchup(catchup) = entry else {
            return Err(variant_mismatch(StreamType::Catchup, entry));
        };
        self.recorder.apply_layers(catchup)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimeshiftPlayerStreamForm {
    pub stream: StreamFieldBag,
    pub hardware: HardwareFieldBag,
    pub relay: RelayFieldBag,
    pub player: TimeshiftPlayerFieldBag,
}

impl TimeshiftPlayerStreamForm {
    pub fn make_entry(&self) -> ValidationResult<StreamSettings> {
        let mut entry = StreamSettings::TimeshiftPlayer(TimeshiftPlayerStream::default());
        self.update_entry(&mut entry)?;
        Ok(entry)
    }

    pub fn update_entry(&self, entry: &mut StreamSettings) -> ValidationResult<()> {
        let StreamSettings::TimeshiftPlayer(player) = entry else {
            return Err(variant_mismatch(StreamType::TimeshiftPlayer, entry));
        };
        let mut staged = player.clone();
        self.stream.apply(&mut staged.base)?;
        self.hardware.apply(&mut staged.hardware)?;
        self.relay.apply(&mut staged.relay)?;
        self.player.apply(&mut staged.player)?;
        *player = staged;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestLifeStreamForm {
    pub relay: RelayStreamForm,
}

impl TestLifeStreamForm {
    pub fn make_entry(&self) -> ValidationResult<StreamSettings> {
        let mut entry = StreamSettings::TestLife(RelayStream::default());
        self.update_entry(&mut entry)?;
        Ok(entry)
    }

    pub fn update_entry(&self, entry: &mut StreamSettings) -> ValidationResult<()> {
        let StreamSettings::TestLife(test) = entry else {
            return Err(variant_mismatch(StreamType::TestLife, entry));
        };
        self.relay.apply_layers(test)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodRelayStreamForm {
    pub relay: RelayStreamForm,
}

impl CodRelayStreamForm {
    pub fn make_entry(&self) -> ValidationResult<StreamSettings> {
        let mut entry = StreamSettings::CodRelay(RelayStream::default());
        self.update_entry(&mut entry)?;
        Ok(entry)
    }

    pub fn update_entry(&self, entry: &mut StreamSettings) -> ValidationResult<()> {
        let StreamSettings::CodRelay(cod) = entry else {
            return Err(variant_mismatch(StreamType::CodRelay, entry));
        };
        self.relay.apply_layers(cod)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodEncodeStreamForm {
    pub encode: EncodeStreamForm,
}

impl CodEncodeStreamForm {
    pub fn make_entry(&self) -> ValidationResult<StreamSettings> {
        let mut entry = StreamSettings::CodEncode(EncodeStream::default());
        self.update_entry(&mut entry)?;
        Ok(entry)
    }

    pub fn update_entry(&self, entry: &mut StreamSettings) -> ValidationResult<()> {
        let StreamSettings::CodEncode(cod) = entry else {
            return Err(variant_mismatch(StreamType::CodEncode, entry));
        };
        self.encode.apply_layers(cod)
    }
}

#[derive(Debug, Clone, Default)]
pub struct VodProxyStreamForm {
    pub stream: StreamFieldBag,
    pub vod: VodFieldBag,
}

impl VodProxyStreamForm {
    pub fn make_entry(&self) -> ValidationResult<StreamSettings> {
        let mut entry = StreamSettings::VodProxy(VodProxyStream::default());
        self.update_entry(&mut entry)?;
        Ok(entry)
    }

    pub fn update_entry(&self, entry: &mut StreamSettings) -> ValidationResult<()> {
        let StreamSettings::VodProxy(vod) = entry else {
            return Err(variant_mismatch(StreamType::VodProxy, entry));
        };
        let mut staged = vod.clone();
        self.stream.apply(&mut staged.base)?;
        self.vod.apply(&mut staged.vod, true)?;
        *vod = staged;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct VodRelayStreamForm {
    pub stream: StreamFieldBag,
    pub hardware: HardwareFieldBag,
    pub relay: RelayFieldBag,
    pub vod: VodFieldBag,
}

impl VodRelayStreamForm {
    pub fn make_entry(&self) -> ValidationResult<StreamSettings> {
        let mut entry = StreamSettings::VodRelay(VodRelayStream::default());
        self.update_entry(&mut entry)?;
        Ok(entry)
    }

    pub fn update_entry(&self, entry: &mut StreamSettings) -> ValidationResult<()> {
        let StreamSettings::VodRelay(vod) = entry else {
            return Err(variant_mismatch(StreamType::VodRelay, entry));
        };
        let mut staged = vod.clone();
        self.stream.apply(&mut staged.base)?;
        self.hardware.apply(&mut staged.hardware)?;
        self.relay.apply(&mut staged.relay)?;
        self.vod.apply(&mut staged.vod, true)?;
        *vod = staged;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct VodEncodeStreamForm {
    pub stream: StreamFieldBag,
    pub hardware: HardwareFieldBag,
    pub encode: EncodeFieldBag,
    pub vod: VodFieldBag,
}

impl VodEncodeStreamForm {
    pub fn make_entry(&self) -> ValidationResult<StreamSettings> {
        let mut entry = StreamSettings::VodEncode(VodEncodeStream::default());
        self.update_entry(&mut entry)?;
        Ok(entry)
    }

    pub fn update_entry(&self, entry: &mut StreamSettings) -> ValidationResult<()> {
        let StreamSettings::VodEncode(vod) = entry else {
            return Err(variant_mismatch(StreamType::VodEncode, entry));
        };
        self.apply_layers(vod, true)
    }

    fn apply_layers(&self, vod: &mut VodEncodeStream, require_vod_type: bool) -> ValidationResult<()> {
        let mut staged = vod.clone();
        self.stream.apply(&mut staged.base)?;
        self.hardware.apply(&mut staged.hardware)?;
        self.encode.apply(&mut staged.encode)?;
        self.vod.apply(&mut staged.vod, require_vod_type)?;
        *vod = staged;
        Ok(())
    }
}

/// Events share the VOD-encode record; their catalog category may be unset.
#[derive(Debug, Clone, Default)]
pub struct EventStreamForm {
    pub encode: VodEncodeStreamForm,
}

impl EventStreamForm {
    pub fn make_entry(&self) -> ValidationResult<StreamSettings> {
        let mut entry = StreamSettings::Event(VodEncodeStream::default());
        self.update_entry(&mut entry)?;
        Ok(entry)
    }

    pub fn update_entry(&self, entry: &mut StreamSettings) -> ValidationResult<()> {
        let StreamSettings::Event(event) = entry else {
            return Err(variant_mismatch(StreamType::Event, entry));
        };
        self.encode.apply_layers(event, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stream::UserAgent;

    fn base_bag() -> StreamFieldBag {
        StreamFieldBag {
            name: "Sports One".to_string(),
            tvg_logo: "http://cdn.example.com/logos/sports.png".to_string(),
            price: 2.0,
            output: vec![OutputEndpoint {
                id: 0,
                uri: "http://edge.example.com/sports/playlist.m3u8".to_string(),
                http_root: "/var/www/sports".to_string(),
            }],
            visible: true,
            ..StreamFieldBag::default()
        }
    }

    fn hardware_bag() -> HardwareFieldBag {
        HardwareFieldBag {
            input: vec![InputEndpoint {
                id: 0,
                uri: "http://origin.example.com/sports".to_string(),
                user_agent: UserAgent::Ffmpeg,
                stream_link: false,
                proxy: None,
            }],
            restart_attempts: 10,
            ..HardwareFieldBag::default()
        }
    }

    fn vod_bag() -> VodFieldBag {
        VodFieldBag {
            vod_type: Some(VodType::Vods),
            preview_icon: "http://cdn.example.com/previews/movie.png".to_string(),
            trailer_url: "http://cdn.example.com/trailers/movie.mp4".to_string(),
            user_score: 73,
            country: "US".to_string(),
            duration_ms: 5_400_000,
            ..VodFieldBag::default()
        }
    }

    #[test]
    fn make_entry_yields_a_complete_relay() {
        let form = RelayStreamForm {
            stream: base_bag(),
            hardware: hardware_bag(),
            relay: RelayFieldBag::default(),
        };
        let entry = form.make_entry().unwrap();
        assert_eq!(entry.stream_type(), StreamType::Relay);
        assert!(entry.is_complete().is_ok());
        assert_eq!(entry.base().name, "Sports One");
    }

    #[test]
    fn update_entry_preserves_the_entity_id() {
        let form = ProxyStreamForm {
            stream: base_bag(),
        };
        let mut entry = form.make_entry().unwrap();
        let id = entry.id();

        let mut renamed = form.clone();
        renamed.stream.name = "Sports Two".to_string();
        renamed.update_entry(&mut entry).unwrap();
        assert_eq!(entry.id(), id);
        assert_eq!(entry.base().name, "Sports Two");
    }

    #[test]
    fn update_entry_rejects_a_foreign_variant() {
        let form = RelayStreamForm {
            stream: base_bag(),
            hardware: hardware_bag(),
            relay: RelayFieldBag::default(),
        };
        let mut proxy = StreamSettings::Proxy(ProxyStream::default());
        let err = form.update_entry(&mut proxy).unwrap_err();
        assert_eq!(
            err,
            ValidationError::VariantMismatch {
                expected: StreamType::Relay,
                actual: StreamType::Proxy,
            }
        );
    }

    #[test]
    fn invalid_bounds_surface_before_any_field_is_written() {
        let mut bag = base_bag();
        bag.price = -1.0;
        let form = ProxyStreamForm { stream: bag };
        let mut entry = StreamSettings::Proxy(ProxyStream::default());
        let before = entry.clone();
        let err = form.update_entry(&mut entry).unwrap_err();
        assert!(matches!(err, ValidationError::ValueOutOfRange { field: "price", .. }));
        assert_eq!(entry, before);
    }

    #[test]
    fn failing_inner_layer_leaves_the_entity_untouched() {
        let form = RelayStreamForm {
            stream: base_bag(),
            hardware: hardware_bag(),
            relay: RelayFieldBag::default(),
        };
        let mut entry = form.make_entry().unwrap();
        let before = entry.clone();

        let mut update = form.clone();
        update.stream.name = "Sports Two".to_string();
        update.hardware.restart_attempts = 0;
        let err = update.update_entry(&mut entry).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ValueOutOfRange {
                field: "restart_attempts",
                ..
            }
        ));
        assert_eq!(entry, before);
    }

    #[test]
    fn failing_vod_layer_leaves_the_proxy_entity_untouched() {
        let form = VodProxyStreamForm {
            stream: base_bag(),
            vod: vod_bag(),
        };
        let mut entry = form.make_entry().unwrap();
        let before = entry.clone();

        let mut update = form.clone();
        update.stream.name = "Sports Two".to_string();
        update.vod.preview_icon = "not a url".to_string();
        let err = update.update_entry(&mut entry).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidUrl { field: "preview_icon" }));
        assert_eq!(entry, before);
    }

    #[test]
    fn hardware_bag_defaults_mirror_the_entity_layer() {
        let bag = HardwareFieldBag::default();
        let layer = HardwareFields::default();
        assert_eq!(bag.have_video, layer.have_video);
        assert_eq!(bag.have_audio, layer.have_audio);
        assert_eq!(bag.log_level, layer.log_level);
        assert_eq!(bag.loop_play, layer.loop_play);
        assert_eq!(bag.restart_attempts, layer.restart_attempts);
    }

    #[test]
    fn vod_relay_form_requires_vod_type() {
        let mut vod = vod_bag();
        vod.vod_type = None;
        let form = VodRelayStreamForm {
            stream: base_bag(),
            hardware: hardware_bag(),
            relay: RelayFieldBag::default(),
            vod,
        };
        let err = form.make_entry().unwrap_err();
        assert_eq!(err, ValidationError::Required { field: "vod_type" });
    }

    #[test]
    fn event_form_accepts_a_missing_vod_type() {
        let mut vod = vod_bag();
        vod.vod_type = None;
        let form = EventStreamForm {
            encode: VodEncodeStreamForm {
                stream: base_bag(),
                hardware: hardware_bag(),
                encode: EncodeFieldBag::default(),
                vod,
            },
        };
        let entry = form.make_entry().unwrap();
        assert_eq!(entry.stream_type(), StreamType::Event);
        assert!(entry.is_complete().is_ok());
    }

    #[test]
    fn catchup_form_tags_the_entry_as_catchup() {
        let form = CatchupStreamForm {
            recorder: TimeshiftRecorderStreamForm {
                stream: base_bag(),
                hardware: hardware_bag(),
                relay: RelayFieldBag::default(),
                timeshift: TimeshiftRecorderFieldBag {
                    chunk_duration: 120,
                    chunk_life_time: 12,
                },
            },
        };
        let entry = form.make_entry().unwrap();
        assert_eq!(entry.stream_type(), StreamType::Catchup);
        assert!(entry.is_complete().is_ok());
    }
}
