//! Chat-assistant proxy. A prompt goes out with a fixed program persona;
//! whatever goes wrong comes back as the fixed fallback reply, never as an
//! error state.

use crate::config;
use serde_json::{json, Value};
use tracing::warn;

const GENERATE_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const SYSTEM_INSTRUCTION: &str = "\
Anda adalah asisten virtual resmi untuk program MBG (Makan Bergizi Gratis) Kabupaten Bandung.
Tujuan Anda adalah memberikan informasi yang akurat, ramah, dan mendukung kepada masyarakat Kabupaten Bandung.

Informasi Utama MBG Kabupaten Bandung:
1. MBG adalah program pemberian makan siang bergizi gratis untuk anak sekolah (PAUD sampai SMP), ibu hamil, dan balita.
2. Visi: Mewujudkan Generasi Emas 2045 dan menurunkan angka stunting di Kabupaten Bandung (Visi BEDAS - Bangkit, Edukatif, Dinamis, Agamis, Sejahtera).
3. Kandungan Gizi: Setiap paket makan mengandung karbohidrat, protein hewani (ayam/ikan/telur), sayuran, buah, dan susu. Kalori disesuaikan dengan kebutuhan usia.
4. Sumber Bahan Baku: Mengutamakan hasil pertanian dan peternakan lokal Kabupaten Bandung untuk memberdayakan ekonomi daerah.
5. Jika ditanya hal teknis pendaftaran yang tidak ada di data, arahkan untuk menghubungi Dinas Pendidikan atau Dinas Kesehatan Kabupaten Bandung.

Jawablah dalam bahasa Indonesia yang sopan dan mudah dimengerti oleh warga. Gunakan istilah populer di Kabupaten Bandung jika relevan (seperti kata 'Bedas').";

pub const FALLBACK_REPLY: &str =
    "Maaf, terjadi kesalahan saat menghubungi asisten AI. Mohon pastikan koneksi internet Anda stabil.";

/// Forward a user prompt to the hosted model. Always produces a reply;
/// failures are logged and replaced with [`FALLBACK_REPLY`].
pub async fn ask_assistant(http: &reqwest::Client, prompt: &str) -> String {
    match try_ask(http, prompt).await {
        Ok(reply) => reply,
        Err(reason) => {
            warn!(reason = %reason, "assistant request failed");
            FALLBACK_REPLY.to_string()
        }
    }
}

async fn try_ask(http: &reqwest::Client, prompt: &str) -> Result<String, String> {
    let key = config::gemini_api_key().ok_or("GEMINI_API_KEY is not set")?;
    let url = format!(
        "{GENERATE_API_BASE}/{model}:generateContent?key={key}",
        model = config::gemini_model()
    );

    let body = json!({
        "system_instruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
        "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
        "generationConfig": { "temperature": 0.7, "topP": 0.9 }
    });

    let response = http
        .post(&url)
        .json(&body)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("assistant endpoint returned HTTP {status}"));
    }

    let value: Value = response.json().await.map_err(|e| e.to_string())?;
    extract_reply(&value).ok_or_else(|| "assistant response had no text candidate".to_string())
}

fn extract_reply(value: &Value) -> Option<String> {
    let text = value
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()?
        .trim();

    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_is_extracted_from_first_candidate() {
        let value = json!({
            "candidates": [
                { "content": { "parts": [{ "text": "Halo! Ada yang bisa dibantu?" }] } }
            ]
        });
        assert_eq!(
            extract_reply(&value).as_deref(),
            Some("Halo! Ada yang bisa dibantu?")
        );
    }

    #[test]
    fn missing_or_empty_candidates_yield_none() {
        assert!(extract_reply(&json!({})).is_none());
        assert!(extract_reply(&json!({ "candidates": [] })).is_none());
        let blank = json!({
            "candidates": [{ "content": { "parts": [{ "text": "   " }] } }]
        });
        assert!(extract_reply(&blank).is_none());
    }
}
