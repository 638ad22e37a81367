// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// 签名校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("signature header missing")]
    MissingSignature,
    #[error("store secret missing")]
    MissingSecret,
    #[error("signature mismatch")]
    Mismatch,
}

/// 计算请求体的签名
///
/// 返回以店铺密钥为键的 HMAC-SHA256 的 base64 编码（标准字母表，带填充）
pub fn sign(secret: &str, body: &[u8]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(body);
    STANDARD.encode(mac.finalize().into_bytes())
}

/// 校验 Webhook 签名
///
/// 比较区分大小写，并以常量时间进行
///
/// # 参数
///
/// * `secret` - 店铺密钥
/// * `body` - 原始请求体
/// * `signature` - 请求头中的签名
pub fn verify(secret: &str, body: &[u8], signature: Option<&str>) -> Result<(), SignatureError> {
    let provided = signature
        .filter(|s| !s.is_empty())
        .ok_or(SignatureError::MissingSignature)?;

    if secret.is_empty() {
        return Err(SignatureError::MissingSecret);
    }

    let expected = sign(secret, body);
    if timing_safe_eq(provided.as_bytes(), expected.as_bytes()) {
        Ok(())
    } else {
        Err(SignatureError::Mismatch)
    }
}

fn timing_safe_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
