use kuching::domain::AudioFormat;

#[test]
fn given_plain_extension_when_mapping_then_returns_format() {
    assert_eq!(AudioFormat::from_extension("wav"), Some(AudioFormat::Wav));
    assert_eq!(AudioFormat::from_extension("flac"), Some(AudioFormat::Flac));
}

#[test]
fn given_extension_with_leading_dot_when_mapping_then_returns_format() {
    assert_eq!(AudioFormat::from_extension(".mp3"), Some(AudioFormat::Mp3));
}

#[test]
fn given_uppercase_extension_when_mapping_then_returns_format() {
    assert_eq!(AudioFormat::from_extension("WAV"), Some(AudioFormat::Wav));
    assert_eq!(AudioFormat::from_extension(".M4A"), Some(AudioFormat::M4a));
}

#[test]
fn given_mpga_alias_when_mapping_then_maps_to_mp3() {
    assert_eq!(AudioFormat::from_extension("mpga"), Some(AudioFormat::Mp3));
}

#[test]
fn given_unknown_extension_when_mapping_then_returns_none() {
    assert_eq!(AudioFormat::from_extension("xyz"), None);
    assert_eq!(AudioFormat::from_extension(""), None);
}

#[test]
fn given_every_format_when_mapping_its_extension_then_round_trips() {
    let formats = [
        AudioFormat::Wav,
        AudioFormat::Mp3,
        AudioFormat::M4a,
        AudioFormat::Ogg,
        AudioFormat::Flac,
        AudioFormat::Webm,
        AudioFormat::Mp4,
        AudioFormat::Mpeg,
    ];

    for format in formats {
        assert_eq!(AudioFormat::from_extension(format.extension()), Some(format));
    }
}
