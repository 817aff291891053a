use crate::common::*;

#[doc = r#"
    TOML 형식의 설정 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    1. 지정된 경로의 TOML 파일을 문자열로 읽어온다
    2. `toml::from_str()`을 사용하여 TOML 문자열을 제네릭 타입 T로 파싱
    3. 파일 읽기나 파싱 실패 시 경로 정보가 포함된 오류 반환

    # Arguments
    * `file_path` - 읽을 TOML 파일의 절대 경로 또는 상대 경로

    # Returns
    * `Result<T, anyhow::Error>` - 성공 시 파싱된 구조체, 실패 시 오류

    # Examples
    ```rust
    let config: TotalConfig = read_toml_from_file("config/server_config.toml")?;
    ```
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path).with_context(|| {
        format!(
            "[read_toml_from_file()] Failed to read toml file '{}'",
            file_path
        )
    })?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = r#"
    RGB 픽셀 버퍼를 PNG 바이트로 인코딩하는 함수.

    plotters 의 `BitMapBackend::with_buffer` 가 그려준 RGB8 버퍼를 그대로 받아
    HTTP 응답 본문으로 사용할 수 있는 PNG 바이트열로 변환한다.

    # Arguments
    * `buffer` - `width * height * 3` 길이의 RGB8 버퍼
    * `width`, `height` - 이미지 크기 (px)
"#]
pub fn encode_png(buffer: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>, anyhow::Error> {
    let rgb_image: RgbImage = RgbImage::from_raw(width, height, buffer).ok_or_else(|| {
        anyhow!(
            "[encode_png()] Pixel buffer does not match a {}x{} RGB image",
            width,
            height
        )
    })?;

    let mut png: Cursor<Vec<u8>> = Cursor::new(Vec::new());
    rgb_image
        .write_to(&mut png, ImageFormat::Png)
        .context("[encode_png()] PNG encoding failed")?;

    Ok(png.into_inner())
}
