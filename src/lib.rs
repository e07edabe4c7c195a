//! # PWA 资源生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 命令行入口（src/bin）                     │
//! │                                                          │
//! │  generate-pwa-icons   generate-splash-screens  check-pwa │
//! │        │                     │                    │      │
//! └────────┼─────────────────────┼────────────────────┼──────┘
//!          ↓                     ↓                    ↓
//! ┌──────────────────────────────────────────────────────────┐
//! │  ┌─ cli ─────────── clap 参数 + env_logger 初始化          │
//! │  ├─ layout ──────── public/ 目录约定                      │
//! │  ├─ error ───────── AppError (统一错误类型 + 退出码)       │
//! │  │                                                       │
//! │  ├─ assets ──────── 图标 / 启动图生成                      │
//! │  │   ├─ pipeline     缩放 · logo 居中合成                 │
//! │  │   └─ encoder      PNG / ICO 写盘                       │
//! │  │                                                       │
//! │  └─ check ───────── manifest · 图标 · 启动图 · index.html  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，入口据此输出日志与退出码 |
//! | [`layout`] | 项目根目录与 `public/` 下输入输出路径 |
//! | [`assets`] | 源图加载、缩放、启动图合成、PNG/ICO 编码 |
//! | [`check`] | PWA 配置与生成结果检查 |
//! | [`cli`] | 命令行参数定义与日志初始化 |

pub mod assets;
pub mod check;
pub mod cli;
pub mod error;
pub mod layout;
