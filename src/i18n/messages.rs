//! Built-in message catalogs, one per supported locale.
//!
//! Templates use `{name}` placeholders, filled by `Catalogs::translate`.

/// English messages
pub const EN_US: &[(&str, &str)] = &[
    // Outline
    ("topic_required_detail", "Parameter error: topic cannot be empty.\nPlease provide the topic for generating images."),
    ("outline_exception", "Outline generation error.\nError details: {error}\nSuggestion: Check backend logs for more information"),

    // Content
    ("topic_required_content", "Parameter error: topic cannot be empty.\nPlease provide topic content."),
    ("outline_required", "Parameter error: outline cannot be empty.\nPlease generate outline first."),
    ("content_exception", "Content generation error.\nError details: {error}\nSuggestion: Check backend logs for more information"),

    // Image
    ("pages_required", "Parameter error: pages cannot be empty.\nPlease provide page list data."),
    ("image_exception", "Image generation error.\nError details: {error}\nSuggestion: Check image generation service configuration and backend logs"),
    ("image_not_found", "Image not found: {task_id}/{filename}"),
    ("get_image_failed", "Failed to get image: {error}"),
    ("retry_params_required", "Parameter error: task_id and page cannot be empty.\nPlease provide task ID and page information."),
    ("retry_single_failed", "Failed to retry image generation.\nError details: {error}"),
    ("retry_batch_params_required", "Parameter error: task_id and pages cannot be empty.\nPlease provide task ID and page list to retry."),
    ("retry_batch_failed", "Batch retry failed.\nError details: {error}"),
    ("regenerate_failed", "Failed to regenerate image.\nError details: {error}"),
    ("task_not_found_detail", "Task not found: {task_id}\nPossible reasons:\n1. Incorrect task ID\n2. Task expired or cleaned\n3. Service restart caused state loss"),
    ("get_task_state_failed", "Failed to get task state.\nError details: {error}"),
    ("service_healthy", "Service is running normally"),

    // History
    ("history_create_params_required", "Parameter error: topic and outline cannot be empty.\nPlease provide topic and outline content."),
    ("history_create_failed", "Failed to create history record.\nError details: {error}"),
    ("history_list_failed", "Failed to get history list.\nError details: {error}"),
    ("history_not_found_detail", "History record not found: {record_id}\nPossible reasons: Record deleted or incorrect ID"),
    ("history_get_failed", "Failed to get history details.\nError details: {error}"),
    ("history_check_failed", "Failed to check record.\nError details: {error}"),
    ("history_update_not_found", "Failed to update history: {record_id}\nPossible reasons: Record not found or invalid data format"),
    ("history_update_failed", "Failed to update history.\nError details: {error}"),
    ("history_delete_not_found", "Failed to delete history: {record_id}\nPossible reasons: Record not found or incorrect ID"),
    ("history_delete_failed", "Failed to delete history.\nError details: {error}"),
    ("keyword_required", "Parameter error: keyword cannot be empty.\nPlease provide search keyword."),
    ("history_search_failed", "Failed to search history.\nError details: {error}"),
    ("history_stats_failed", "Failed to get history statistics.\nError details: {error}"),
    ("scan_task_failed", "Failed to scan task.\nError details: {error}"),
    ("scan_all_failed", "Failed to scan all tasks.\nError details: {error}"),
    ("download_no_task", "This record has no associated task images"),
    ("task_dir_not_found", "Task directory not found: {task_id}"),
    ("download_failed", "Download failed.\nError details: {error}"),

    // Config
    ("get_config_failed", "Failed to get configuration: {error}"),
    ("update_config_failed", "Failed to update configuration: {error}"),
    ("config_saved", "Configuration saved"),
    ("type_required", "Missing type parameter"),
    ("api_key_not_configured", "API Key not configured"),
    ("unsupported_type", "Unsupported type: {provider_type}"),
    ("connection_success_unstable", "Connection successful! Only indicates stable connection, stability of image generation not guaranteed"),
    ("connection_test_failed", "Connection test failed: {error}"),
    ("vertex_ai_no_test", "Vertex AI cannot test connection via API Key (OAuth2 required). Please verify configuration when generating images."),
    ("connection_success_response", "Connection successful! Response: {response}"),
    ("connection_success_unexpected", "Connection successful, but response content unexpected: {response}"),

    // Locale
    ("unsupported_locale", "Unsupported locale: {locale}"),
    ("locale_changed", "Language switched to {locale}"),
];

/// Simplified Chinese messages
pub const ZH_CN: &[(&str, &str)] = &[
    // Outline
    ("topic_required_detail", "参数错误：topic 不能为空。\n请提供要生成图文的主题内容。"),
    ("outline_exception", "大纲生成异常。\n错误详情: {error}\n建议：检查后端日志获取更多信息"),

    // Content
    ("topic_required_content", "参数错误：topic 不能为空。\n请提供主题内容。"),
    ("outline_required", "参数错误：outline 不能为空。\n请先生成大纲。"),
    ("content_exception", "内容生成异常。\n错误详情: {error}\n建议：检查后端日志获取更多信息"),

    // Image
    ("pages_required", "参数错误：pages 不能为空。\n请提供要生成的页面列表数据。"),
    ("image_exception", "图片生成异常。\n错误详情: {error}\n建议：检查图片生成服务配置和后端日志"),
    ("image_not_found", "图片不存在：{task_id}/{filename}"),
    ("get_image_failed", "获取图片失败: {error}"),
    ("retry_params_required", "参数错误：task_id 和 page 不能为空。\n请提供任务ID和页面信息。"),
    ("retry_single_failed", "重试图片生成失败。\n错误详情: {error}"),
    ("retry_batch_params_required", "参数错误：task_id 和 pages 不能为空。\n请提供任务ID和要重试的页面列表。"),
    ("retry_batch_failed", "批量重试失败。\n错误详情: {error}"),
    ("regenerate_failed", "重新生成图片失败。\n错误详情: {error}"),
    ("task_not_found_detail", "任务不存在：{task_id}\n可能原因：\n1. 任务ID错误\n2. 任务已过期或被清理\n3. 服务重启导致状态丢失"),
    ("get_task_state_failed", "获取任务状态失败。\n错误详情: {error}"),
    ("service_healthy", "服务正常运行"),

    // History
    ("history_create_params_required", "参数错误：topic 和 outline 不能为空。\n请提供主题和大纲内容。"),
    ("history_create_failed", "创建历史记录失败。\n错误详情: {error}"),
    ("history_list_failed", "获取历史记录列表失败。\n错误详情: {error}"),
    ("history_not_found_detail", "历史记录不存在：{record_id}\n可能原因：记录已被删除或ID错误"),
    ("history_get_failed", "获取历史记录详情失败。\n错误详情: {error}"),
    ("history_check_failed", "检查记录失败。\n错误详情: {error}"),
    ("history_update_not_found", "更新历史记录失败：{record_id}\n可能原因：记录不存在或数据格式错误"),
    ("history_update_failed", "更新历史记录失败。\n错误详情: {error}"),
    ("history_delete_not_found", "删除历史记录失败：{record_id}\n可能原因：记录不存在或ID错误"),
    ("history_delete_failed", "删除历史记录失败。\n错误详情: {error}"),
    ("keyword_required", "参数错误：keyword 不能为空。\n请提供搜索关键词。"),
    ("history_search_failed", "搜索历史记录失败。\n错误详情: {error}"),
    ("history_stats_failed", "获取历史记录统计失败。\n错误详情: {error}"),
    ("scan_task_failed", "扫描任务失败。\n错误详情: {error}"),
    ("scan_all_failed", "扫描所有任务失败。\n错误详情: {error}"),
    ("download_no_task", "该记录没有关联的任务图片"),
    ("task_dir_not_found", "任务目录不存在：{task_id}"),
    ("download_failed", "下载失败。\n错误详情: {error}"),

    // Config
    ("get_config_failed", "获取配置失败: {error}"),
    ("update_config_failed", "更新配置失败: {error}"),
    ("config_saved", "配置已保存"),
    ("type_required", "缺少 type 参数"),
    ("api_key_not_configured", "API Key 未配置"),
    ("unsupported_type", "不支持的类型: {provider_type}"),
    ("connection_success_unstable", "连接成功！仅代表连接稳定，不确定是否可以稳定支持图片生成"),
    ("connection_test_failed", "连接测试失败: {error}"),
    ("vertex_ai_no_test", "Vertex AI 无法通过 API Key 测试连接（需要 OAuth2 认证）。请在实际生成图片时验证配置是否正确。"),
    ("connection_success_response", "连接成功！响应: {response}"),
    ("connection_success_unexpected", "连接成功，但响应内容不符合预期: {response}"),

    // Locale
    ("unsupported_locale", "不支持的语言: {locale}"),
    ("locale_changed", "语言已切换为 {locale}"),
];

/// Traditional Chinese messages
pub const ZH_TW: &[(&str, &str)] = &[
    // Outline
    ("topic_required_detail", "參數錯誤：topic 不能為空。\n請提供要生成圖文的主題內容。"),
    ("outline_exception", "大綱生成異常。\n錯誤詳情: {error}\n建議：檢查後端日誌獲取更多資訊"),

    // Content
    ("topic_required_content", "參數錯誤：topic 不能為空。\n請提供主題內容。"),
    ("outline_required", "參數錯誤：outline 不能為空。\n請先生成大綱。"),
    ("content_exception", "內容生成異常。\n錯誤詳情: {error}\n建議：檢查後端日誌獲取更多資訊"),

    // Image
    ("pages_required", "參數錯誤：pages 不能為空。\n請提供要生成的頁面列表數據。"),
    ("image_exception", "圖片生成異常。\n錯誤詳情: {error}\n建議：檢查圖片生成服務配置和後端日誌"),
    ("image_not_found", "圖片不存在：{task_id}/{filename}"),
    ("get_image_failed", "獲取圖片失敗: {error}"),
    ("retry_params_required", "參數錯誤：task_id 和 page 不能為空。\n請提供任務ID和頁面資訊。"),
    ("retry_single_failed", "重試圖片生成失敗。\n錯誤詳情: {error}"),
    ("retry_batch_params_required", "參數錯誤：task_id 和 pages 不能為空。\n請提供任務ID和要重試的頁面列表。"),
    ("retry_batch_failed", "批量重試失敗。\n錯誤詳情: {error}"),
    ("regenerate_failed", "重新生成圖片失敗。\n錯誤詳情: {error}"),
    ("task_not_found_detail", "任務不存在：{task_id}\n可能原因：\n1. 任務ID錯誤\n2. 任務已過期或被清理\n3. 服務重啟導致狀態丟失"),
    ("get_task_state_failed", "獲取任務狀態失敗。\n錯誤詳情: {error}"),
    ("service_healthy", "服務正常運行"),

    // History
    ("history_create_params_required", "參數錯誤：topic 和 outline 不能為空。\n請提供主題和大綱內容。"),
    ("history_create_failed", "創建歷史記錄失敗。\n錯誤詳情: {error}"),
    ("history_list_failed", "獲取歷史記錄列表失敗。\n錯誤詳情: {error}"),
    ("history_not_found_detail", "歷史記錄不存在：{record_id}\n可能原因：記錄已被刪除或ID錯誤"),
    ("history_get_failed", "獲取歷史記錄詳情失敗。\n錯誤詳情: {error}"),
    ("history_check_failed", "檢查記錄失敗。\n錯誤詳情: {error}"),
    ("history_update_not_found", "更新歷史記錄失敗：{record_id}\n可能原因：記錄不存在或數據格式錯誤"),
    ("history_update_failed", "更新歷史記錄失敗。\n錯誤詳情: {error}"),
    ("history_delete_not_found", "刪除歷史記錄失敗：{record_id}\n可能原因：記錄不存在或ID錯誤"),
    ("history_delete_failed", "刪除歷史記錄失敗。\n錯誤詳情: {error}"),
    ("keyword_required", "參數錯誤：keyword 不能為空。\n請提供搜尋關鍵詞。"),
    ("history_search_failed", "搜尋歷史記錄失敗。\n錯誤詳情: {error}"),
    ("history_stats_failed", "獲取歷史記錄統計失敗。\n錯誤詳情: {error}"),
    ("scan_task_failed", "掃描任務失敗。\n錯誤詳情: {error}"),
    ("scan_all_failed", "掃描所有任務失敗。\n錯誤詳情: {error}"),
    ("download_no_task", "該記錄沒有關聯的任務圖片"),
    ("task_dir_not_found", "任務目錄不存在：{task_id}"),
    ("download_failed", "下載失敗。\n錯誤詳情: {error}"),

    // Config
    ("get_config_failed", "獲取配置失敗: {error}"),
    ("update_config_failed", "更新配置失敗: {error}"),
    ("config_saved", "配置已保存"),
    ("type_required", "缺少 type 參數"),
    ("api_key_not_configured", "API Key 未配置"),
    ("unsupported_type", "不支援的類型: {provider_type}"),
    ("connection_success_unstable", "連線成功！僅代表連線穩定，不確定是否可以穩定支援圖片生成"),
    ("connection_test_failed", "連線測試失敗: {error}"),
    ("vertex_ai_no_test", "Vertex AI 無法透過 API Key 測試連線（需要 OAuth2 認證）。請在實際生成圖片時驗證配置是否正確。"),
    ("connection_success_response", "連線成功！響應: {response}"),
    ("connection_success_unexpected", "連線成功，但響應內容不符合預期: {response}"),

    // Locale
    ("unsupported_locale", "不支援的語言: {locale}"),
    ("locale_changed", "語言已切換為 {locale}"),
];
